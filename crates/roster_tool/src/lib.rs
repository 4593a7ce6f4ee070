//! Roster Tool Library
//!
//! Roster files (YAML / JSON / CSV) → `tb_core::Roster`
//! Guest specs from the command line → `GuestList`
//! Generated teams → plain-text report

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tb_core::{
    BalanceError, BalanceSummary, GuestList, Rating, Role, Roster, RosterEntry, SelectionStatus,
    Team, TeamStats,
};

/// Env var naming the roster file used when none is given explicitly.
pub const ROSTER_PATH_ENV: &str = "TB_ROSTER_PATH";

/// Load a roster, picking the format from the file extension.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => import_roster_csv(path),
        "json" => {
            let content = read(path)?;
            Roster::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON roster: {}", path.display()))
        }
        "yaml" | "yml" => {
            let content = read(path)?;
            Roster::from_yaml_str(&content)
                .with_context(|| format!("Failed to parse YAML roster: {}", path.display()))
        }
        other => bail!("Unsupported roster format '{}': {}", other, path.display()),
    }
}

/// `--roster` if given, else `TB_ROSTER_PATH`, else the bundled roster.
pub fn resolve_roster(explicit: Option<&Path>) -> Result<Roster> {
    if let Some(path) = explicit {
        return load_roster(path);
    }

    if let Ok(path) = env::var(ROSTER_PATH_ENV) {
        let path = path.trim();
        if !path.is_empty() {
            log::info!("Using roster from {}={}", ROSTER_PATH_ENV, path);
            return load_roster(Path::new(path));
        }
    }

    Roster::default_regulars().context("Bundled roster is invalid")
}

/// Read a CSV roster.
///
/// Header must contain `name` and `role`, plus either
/// `attack,defense,endurance` or `rating`.
pub fn import_roster_csv(csv_path: &Path) -> Result<Roster> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut entries = Vec::new();
    for (line, record) in reader.deserialize::<RosterEntry>().enumerate() {
        // +2: header line and 1-based numbering
        let entry = record.with_context(|| format!("Bad CSV row at line {}", line + 2))?;
        entries.push(entry);
    }

    log::debug!("Read {} rows from {}", entries.len(), csv_path.display());
    Roster::from_entries(entries)
        .with_context(|| format!("Invalid roster in {}", csv_path.display()))
}

/// Convert a CSV roster into the YAML roster format.
pub fn convert_csv_to_yaml(csv_path: &Path, out: &Path) -> Result<usize> {
    let roster = import_roster_csv(csv_path)?;
    let yaml = roster.to_yaml_string()?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(out, yaml).with_context(|| format!("Failed to write roster: {}", out.display()))?;
    Ok(roster.len())
}

/// Parse `name:attack:defense:endurance:role` or `name:rating:role`.
pub fn parse_guest_spec(spec: &str) -> Result<(String, Rating, Role)> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let score = |s: &str| -> Result<u32> {
        s.parse::<u32>().with_context(|| format!("Invalid score '{}' in guest '{}'", s, spec))
    };
    let role = |s: &str| -> Result<Role> {
        s.parse::<Role>().map_err(|e| anyhow::anyhow!("{} in guest '{}'", e, spec))
    };

    match parts.as_slice() {
        [name, attack, defense, endurance, r] => Ok((
            name.to_string(),
            Rating::detailed(score(attack)?, score(defense)?, score(endurance)?),
            role(r)?,
        )),
        [name, rating, r] => Ok((name.to_string(), Rating::composite(score(rating)?), role(r)?)),
        _ => bail!(
            "Guest '{}' must be name:attack:defense:endurance:role or name:rating:role",
            spec
        ),
    }
}

/// Build a guest list from command-line specs.
pub fn guests_from_specs<S: AsRef<str>>(specs: &[S]) -> Result<GuestList> {
    let mut guests = GuestList::new();
    for spec in specs {
        let (name, rating, role) = parse_guest_spec(spec.as_ref())?;
        guests.add(&name, rating, role)?;
    }
    Ok(guests)
}

pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    for player in &roster.regulars {
        let scores = match player.rating.dimensions() {
            Some(d) => format!("ATT {} DEF {} END {}", d.attack, d.defense, d.endurance),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "{:<14} {:<21}  Total {:>2}  Pos {}",
            player.name,
            scores,
            player.total_rating(),
            player.role.code()
        );
    }
    out
}

pub fn render_selection(status: &SelectionStatus) -> String {
    if status.is_ready() {
        format!("{} / {} players selected", status.selected, status.required)
    } else {
        format!(
            "{} / {} players selected (teams x players per team must match)",
            status.selected, status.required
        )
    }
}

/// Team rosters followed by the balance summary.
pub fn render_teams(teams: &[Team], summary: &BalanceSummary) -> String {
    let mut out = String::new();

    for (i, (team, stats)) in teams.iter().zip(&summary.teams).enumerate() {
        let _ = writeln!(out, "Team {}  (Total {})", i + 1, stats.total);
        if has_dimensions(team) {
            let _ = writeln!(out, "  {}", render_dimensions(stats));
        }
        for player in team.iter() {
            let _ = writeln!(
                out,
                "  - {:<14} {:>2}  {}",
                player.name,
                player.total_rating(),
                player.role.code()
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Total spread: {}", summary.total_spread);
    if let Some(d) = summary.dimension_spread {
        let _ = writeln!(
            out,
            "Spread by skill: ATT {}  DEF {}  END {}",
            d.attack, d.defense, d.endurance
        );
    }
    out
}

fn has_dimensions(team: &Team) -> bool {
    team.iter().any(|p| p.rating.dimensions().is_some())
}

fn render_dimensions(stats: &TeamStats) -> String {
    format!("ATT {}  DEF {}  END {}", stats.attack, stats.defense, stats.endurance)
}

/// One-line message for a failed run.
pub fn describe_failure(err: &BalanceError) -> String {
    format!("{}. {}.", err, err.guidance())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read roster: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tb_core::{balance, select_participants, RunConfiguration};
    use tempfile::{Builder, NamedTempFile};

    fn temp_with(suffix: &str, content: &str) -> Result<NamedTempFile> {
        let mut file = Builder::new().suffix(suffix).tempfile()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_import_detailed_csv() -> Result<()> {
        let file = temp_with(
            ".csv",
            "name,attack,defense,endurance,role\nHamid, 5, 2, 3, A\nDaniel,2,5,3,D\n",
        )?;

        let roster = import_roster_csv(file.path())?;

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find("Hamid").unwrap().rating, Rating::detailed(5, 2, 3));
        assert_eq!(roster.find("Daniel").unwrap().role, Role::Defender);
        Ok(())
    }

    #[test]
    fn test_import_composite_csv() -> Result<()> {
        let file = temp_with(".csv", "name,rating,role\nGuest Star,12,P\n")?;

        let roster = load_roster(file.path())?;

        assert_eq!(roster.regulars[0].rating, Rating::composite(12));
        assert_eq!(roster.regulars[0].role, Role::Versatile);
        Ok(())
    }

    #[test]
    fn test_import_csv_reports_bad_rows() -> Result<()> {
        let file = temp_with(".csv", "name,rating,role\nGuest,twelve,P\n")?;
        let err = import_roster_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        Ok(())
    }

    #[test]
    fn test_convert_csv_to_yaml() -> Result<()> {
        let csv = temp_with(".csv", "name,attack,defense,endurance,role\nRaoul,1,2,3,A\n")?;
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("rosters").join("regulars.yaml");

        let count = convert_csv_to_yaml(csv.path(), &out)?;

        assert_eq!(count, 1);
        let roster = load_roster(&out)?;
        assert_eq!(roster.find("Raoul").unwrap().total_rating(), 6);
        Ok(())
    }

    #[test]
    fn test_load_roster_by_extension() -> Result<()> {
        let json = temp_with(".json", r#"[{ "name": "Emile", "rating": 8, "role": "D" }]"#)?;
        assert_eq!(load_roster(json.path())?.len(), 1);

        let yaml = temp_with(".yml", "- { name: Emile, rating: 8, role: D }\n")?;
        assert_eq!(load_roster(yaml.path())?.len(), 1);

        let txt = temp_with(".txt", "Emile")?;
        assert!(load_roster(txt.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_explicit_roster_wins() -> Result<()> {
        let yaml = temp_with(".yaml", "- { name: Solo, rating: 8, role: P }\n")?;
        let roster = resolve_roster(Some(yaml.path()))?;
        assert_eq!(roster.len(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_guest_spec() -> Result<()> {
        assert_eq!(
            parse_guest_spec("Zizou:5:4:3:P")?,
            ("Zizou".to_string(), Rating::detailed(5, 4, 3), Role::Versatile)
        );
        assert_eq!(
            parse_guest_spec("Kylian : 13 : attacker")?,
            ("Kylian".to_string(), Rating::composite(13), Role::Attacker)
        );
        assert!(parse_guest_spec("Nobody").is_err());
        assert!(parse_guest_spec("Bad:x:D").is_err());
        assert!(parse_guest_spec("Bad:3:keeper").is_err());
        Ok(())
    }

    #[test]
    fn test_guests_from_specs_validates_ranges() {
        assert!(guests_from_specs(&["Ok:3:3:3:D"]).is_ok());
        assert!(guests_from_specs(&["TooGood:9:3:3:D"]).is_err());
        assert!(guests_from_specs(&["Twin:3:D", "Twin:4:A"]).is_err());
    }

    #[test]
    fn test_render_teams_lists_players_and_spread() -> Result<()> {
        let roster = Roster::default_regulars()?;
        let guests = GuestList::new();
        let present = ["Hamid", "Daniel", "Arnaud", "Olivier"];
        let players = select_participants(&roster, &present, &guests)?;
        let teams = balance(&players, &RunConfiguration::new(2, 2))?;
        let summary = BalanceSummary::of(&teams);

        let report = render_teams(&teams, &summary);

        assert!(report.contains("Team 1  (Total 20)"));
        assert!(report.contains("Team 2  (Total 20)"));
        assert!(report.contains("- Hamid"));
        assert!(report.contains("Total spread: 0"));
        assert!(report.contains("Spread by skill: ATT 2  DEF 1  END 1"));
        Ok(())
    }

    #[test]
    fn test_render_roster_and_selection() -> Result<()> {
        let roster = Roster::default_regulars()?;
        let listing = render_roster(&roster);
        assert_eq!(listing.lines().count(), 21);
        assert!(listing.contains("Ariel"));
        assert!(listing.contains("ATT 5 DEF 5 END 5"));

        let status = SelectionStatus::new(9, &RunConfiguration::default());
        assert_eq!(
            render_selection(&status),
            "9 / 10 players selected (teams x players per team must match)"
        );
        Ok(())
    }

    #[test]
    fn test_describe_failure() {
        let err = BalanceError::InsufficientAttackers { team_index: 2 };
        assert_eq!(
            describe_failure(&err),
            "Not enough attackers or versatile players to seed team 3. \
             Add more attack-capable (attacker or versatile) players."
        );
    }
}
