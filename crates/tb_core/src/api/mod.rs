pub mod json_api;

pub use json_api::{
    generate_teams, generate_teams_json, ApiError, ApiResponse, GenerateTeamsRequest,
    GenerateTeamsResponse, API_VERSION,
};
