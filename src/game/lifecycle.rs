//! Game lifecycle rules that do not need the store: input validation,
//! team distinctness, patch application and winner derivation.
//!
//! Reference resolution (does this sport/team exist?) happens in
//! `services::game_service`, which feeds already-parsed ids in here.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};
use crate::models::game::{CreateGameRequest, Game, GameStatus, UpdateGameRequest};
use crate::utils::ids::{non_blank, parse_id};
use crate::utils::timestamp::parse_timestamp;

/// Result of comparing two scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one score is still unknown.
    Pending,
    TeamA,
    TeamB,
    Draw,
}

impl Outcome {
    pub fn from_scores(score_a: Option<i32>, score_b: Option<i32>) -> Self {
        match (score_a, score_b) {
            (Some(a), Some(b)) if a > b => Outcome::TeamA,
            (Some(a), Some(b)) if b > a => Outcome::TeamB,
            (Some(_), Some(_)) => Outcome::Draw,
            _ => Outcome::Pending,
        }
    }
}

/// Winner implied by the scores, or `None` when no winner can be derived
/// (a draw or a missing score). Use `Outcome` to tell those apart.
pub fn derive_winner(game: &Game) -> Option<Uuid> {
    match Outcome::from_scores(game.score_a, game.score_b) {
        Outcome::TeamA => Some(game.team_a_id),
        Outcome::TeamB => Some(game.team_b_id),
        Outcome::Draw | Outcome::Pending => None,
    }
}

/// Raw reference that either parsed to an id or can never resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    Id(Uuid),
    Unresolvable(String),
}

impl Reference {
    fn parse(raw: &str) -> Self {
        match parse_id(raw) {
            Some(id) => Reference::Id(id),
            None => Reference::Unresolvable(raw.trim().to_string()),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        match self {
            Reference::Id(id) => Some(*id),
            Reference::Unresolvable(_) => None,
        }
    }
}

/// A validated create request, references not yet resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub sport: Reference,
    pub team_a: Reference,
    pub team_b: Reference,
    pub game_date: DateTime<Utc>,
    pub location: Option<String>,
}

impl NewGame {
    pub fn parse(request: &CreateGameRequest) -> PortalResult<Self> {
        let (Some(sport), Some(team_a), Some(team_b), Some(game_date)) = (
            non_blank(request.sport_id.as_deref()),
            non_blank(request.team_a_id.as_deref()),
            non_blank(request.team_b_id.as_deref()),
            non_blank(request.game_date.as_deref()),
        ) else {
            return Err(PortalError::validation(
                "Sport, both teams and the game date are required",
            ));
        };

        let team_a = Reference::parse(team_a);
        let team_b = Reference::parse(team_b);
        if team_a == team_b {
            return Err(PortalError::validation("Teams must be different"));
        }

        let game_date = parse_timestamp(game_date).ok_or_else(|| {
            PortalError::validation("Invalid date format. Use ISO 8601.")
        })?;

        Ok(Self {
            sport: Reference::parse(sport),
            team_a,
            team_b,
            game_date,
            location: non_blank(request.location.as_deref()).map(str::to_string),
        })
    }

    /// Build the stored record once every reference has resolved.
    pub fn into_game(self, sport_id: Uuid, team_a_id: Uuid, team_b_id: Uuid) -> Game {
        Game {
            id: Uuid::new_v4(),
            sport_id,
            team_a_id,
            team_b_id,
            score_a: None,
            score_b: None,
            game_date: self.game_date,
            location: self.location,
            status: GameStatus::Scheduled,
            winner_team_id: None,
        }
    }
}

/// A parsed partial update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamePatch {
    pub sport: Option<Reference>,
    pub team_a: Option<Reference>,
    pub team_b: Option<Reference>,
    pub score_a: Option<i32>,
    pub score_b: Option<i32>,
    pub game_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<GameStatus>,
    pub winner: Option<Reference>,
}

impl GamePatch {
    pub fn parse(request: &UpdateGameRequest) -> PortalResult<Self> {
        for score in [request.score_a, request.score_b].into_iter().flatten() {
            if score < 0 {
                return Err(PortalError::validation("Scores cannot be negative"));
            }
        }

        let game_date = match request.game_date.as_deref() {
            Some(raw) => Some(
                parse_timestamp(raw)
                    .ok_or_else(|| PortalError::validation("Invalid date format"))?,
            ),
            None => None,
        };

        let status = match request.status.as_deref() {
            Some(raw) => Some(
                raw.parse::<GameStatus>()
                    .map_err(|e| PortalError::validation(e.to_string()))?,
            ),
            None => None,
        };

        // Absent means untouched; present but blank is an error.
        let reference = |raw: &Option<String>, label: &str| -> PortalResult<Option<Reference>> {
            match raw.as_deref() {
                None => Ok(None),
                Some(raw) => non_blank(Some(raw))
                    .map(|id| Some(Reference::parse(id)))
                    .ok_or_else(|| PortalError::validation(format!("{} cannot be empty", label))),
            }
        };

        Ok(Self {
            sport: reference(&request.sport_id, "Sport")?,
            team_a: reference(&request.team_a_id, "Team A")?,
            team_b: reference(&request.team_b_id, "Team B")?,
            score_a: request.score_a,
            score_b: request.score_b,
            game_date,
            location: request.location.clone(),
            status,
            winner: reference(&request.winner_team_id, "Winner")?,
        })
    }

    /// Every id the patch refers to, for existence checks against the store.
    pub fn references(&self) -> impl Iterator<Item = (&'static str, &Reference)> {
        [
            ("Sport", self.sport.as_ref()),
            ("Team A", self.team_a.as_ref()),
            ("Team B", self.team_b.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, reference)| reference.map(|r| (label, r)))
    }

    /// Apply the patch and recompute the winner.
    ///
    /// References must already be known to resolve. When both scores are
    /// known after the patch the derived winner replaces whatever was
    /// stored or supplied; otherwise a supplied winner is kept as long as it
    /// is one of the two teams.
    pub fn apply(self, game: &mut Game) -> PortalResult<()> {
        if let Some(sport_id) = self.sport.as_ref().and_then(Reference::id) {
            game.sport_id = sport_id;
        }
        if let Some(team_a_id) = self.team_a.as_ref().and_then(Reference::id) {
            game.team_a_id = team_a_id;
        }
        if let Some(team_b_id) = self.team_b.as_ref().and_then(Reference::id) {
            game.team_b_id = team_b_id;
        }
        if game.team_a_id == game.team_b_id {
            return Err(PortalError::validation("Teams must be different"));
        }

        if let Some(score_a) = self.score_a {
            game.score_a = Some(score_a);
        }
        if let Some(score_b) = self.score_b {
            game.score_b = Some(score_b);
        }
        if let Some(game_date) = self.game_date {
            game.game_date = game_date;
        }
        if let Some(location) = self.location {
            game.location = Some(location);
        }
        if let Some(status) = self.status {
            game.status = status;
        }

        match Outcome::from_scores(game.score_a, game.score_b) {
            Outcome::Pending => {
                if let Some(winner) = self.winner {
                    let winner = winner
                        .id()
                        .filter(|id| *id == game.team_a_id || *id == game.team_b_id)
                        .ok_or_else(|| {
                            PortalError::validation("Winner must be one of the two teams")
                        })?;
                    game.winner_team_id = Some(winner);
                } else if game
                    .winner_team_id
                    .is_some_and(|id| id != game.team_a_id && id != game.team_b_id)
                {
                    // The stored winner left the game with a team change
                    game.winner_team_id = None;
                }
            }
            _ => game.winner_team_id = derive_winner(game),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scheduled_game() -> Game {
        let request = CreateGameRequest {
            sport_id: Some(Uuid::new_v4().to_string()),
            team_a_id: Some(Uuid::new_v4().to_string()),
            team_b_id: Some(Uuid::new_v4().to_string()),
            game_date: Some("2025-08-01T10:00:00Z".into()),
            location: Some("Main court".into()),
        };
        let new_game = NewGame::parse(&request).unwrap();
        let (sport, a, b) = (
            new_game.sport.id().unwrap(),
            new_game.team_a.id().unwrap(),
            new_game.team_b.id().unwrap(),
        );
        new_game.into_game(sport, a, b)
    }

    fn scores(score_a: Option<i32>, score_b: Option<i32>) -> UpdateGameRequest {
        UpdateGameRequest {
            score_a,
            score_b,
            ..Default::default()
        }
    }

    fn patch(game: &mut Game, request: UpdateGameRequest) -> PortalResult<()> {
        GamePatch::parse(&request)?.apply(game)
    }

    #[test]
    fn new_game_starts_scheduled_without_result() {
        let game = scheduled_game();
        assert_eq!(game.status, GameStatus::Scheduled);
        assert_eq!(game.score_a, None);
        assert_eq!(game.score_b, None);
        assert_eq!(game.winner_team_id, None);
        assert_eq!(game.game_date, Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn create_rejects_same_team_on_both_sides() {
        let team = Uuid::new_v4().to_string();
        let request = CreateGameRequest {
            sport_id: Some(Uuid::new_v4().to_string()),
            team_a_id: Some(team.clone()),
            team_b_id: Some(team),
            game_date: Some("2025-08-01T10:00:00Z".into()),
            location: None,
        };
        assert!(matches!(NewGame::parse(&request), Err(PortalError::Validation(_))));

        // Opaque ids that will never resolve are still compared
        let request = CreateGameRequest {
            team_a_id: Some("informatica".into()),
            team_b_id: Some("informatica".into()),
            ..request
        };
        assert!(matches!(NewGame::parse(&request), Err(PortalError::Validation(_))));
    }

    #[test]
    fn create_requires_every_mandatory_field() {
        let complete = CreateGameRequest {
            sport_id: Some(Uuid::new_v4().to_string()),
            team_a_id: Some(Uuid::new_v4().to_string()),
            team_b_id: Some(Uuid::new_v4().to_string()),
            game_date: Some("2025-08-01T10:00:00Z".into()),
            location: None,
        };
        assert!(NewGame::parse(&complete).is_ok());

        let missing_sport = CreateGameRequest { sport_id: None, ..complete.clone() };
        let blank_team = CreateGameRequest { team_b_id: Some("  ".into()), ..complete.clone() };
        let missing_date = CreateGameRequest { game_date: None, ..complete.clone() };
        for request in [missing_sport, blank_team, missing_date] {
            assert!(matches!(NewGame::parse(&request), Err(PortalError::Validation(_))));
        }
    }

    #[test]
    fn create_rejects_unparseable_dates() {
        let request = CreateGameRequest {
            sport_id: Some(Uuid::new_v4().to_string()),
            team_a_id: Some(Uuid::new_v4().to_string()),
            team_b_id: Some(Uuid::new_v4().to_string()),
            game_date: Some("01/08/2025".into()),
            location: None,
        };
        assert!(matches!(NewGame::parse(&request), Err(PortalError::Validation(_))));
    }

    #[test]
    fn outcome_follows_strictly_greater_score() {
        assert_eq!(Outcome::from_scores(Some(3), Some(1)), Outcome::TeamA);
        assert_eq!(Outcome::from_scores(Some(0), Some(2)), Outcome::TeamB);
        assert_eq!(Outcome::from_scores(Some(2), Some(2)), Outcome::Draw);
        assert_eq!(Outcome::from_scores(Some(2), None), Outcome::Pending);
        assert_eq!(Outcome::from_scores(None, None), Outcome::Pending);
    }

    #[test]
    fn scoring_updates_recompute_the_winner() {
        let mut game = scheduled_game();

        patch(&mut game, scores(Some(3), Some(1))).unwrap();
        assert_eq!(game.winner_team_id, Some(game.team_a_id));

        // score_b stays 1 from the previous update
        patch(&mut game, scores(Some(2), None)).unwrap();
        assert_eq!(game.score_b, Some(1));
        assert_eq!(game.winner_team_id, Some(game.team_a_id));

        patch(&mut game, scores(None, Some(4))).unwrap();
        assert_eq!(game.winner_team_id, Some(game.team_b_id));

        patch(&mut game, scores(Some(4), None)).unwrap();
        assert_eq!(game.winner_team_id, None);
    }

    #[test]
    fn supplied_winner_is_ignored_once_both_scores_are_known() {
        let mut game = scheduled_game();
        let request = UpdateGameRequest {
            score_a: Some(1),
            score_b: Some(2),
            winner_team_id: Some(game.team_a_id.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.winner_team_id, Some(game.team_b_id));

        let request = UpdateGameRequest {
            winner_team_id: Some(game.team_a_id.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.winner_team_id, Some(game.team_b_id));
    }

    #[test]
    fn supplied_winner_is_honored_while_a_score_is_missing() {
        let mut game = scheduled_game();
        let request = UpdateGameRequest {
            score_a: Some(0),
            winner_team_id: Some(game.team_b_id.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.winner_team_id, Some(game.team_b_id));
    }

    #[test]
    fn supplied_winner_must_take_part_in_the_game() {
        let mut game = scheduled_game();
        let request = UpdateGameRequest {
            winner_team_id: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        };
        assert!(matches!(patch(&mut game, request), Err(PortalError::Validation(_))));
        assert_eq!(game.winner_team_id, None);
    }

    #[test]
    fn patch_cannot_make_teams_equal() {
        let mut game = scheduled_game();
        let request = UpdateGameRequest {
            team_b_id: Some(game.team_a_id.to_string()),
            ..Default::default()
        };
        assert!(matches!(patch(&mut game, request), Err(PortalError::Validation(_))));
    }

    #[test]
    fn swapping_teams_keeps_winner_tied_to_scores() {
        let mut game = scheduled_game();
        let (a, b) = (game.team_a_id, game.team_b_id);
        patch(&mut game, scores(Some(5), Some(0))).unwrap();
        assert_eq!(game.winner_team_id, Some(a));

        let request = UpdateGameRequest {
            team_a_id: Some(b.to_string()),
            team_b_id: Some(a.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.winner_team_id, Some(b));
    }

    #[test]
    fn replacing_a_team_drops_its_pending_win() {
        let mut game = scheduled_game();
        let (a, b) = (game.team_a_id, game.team_b_id);
        let request = UpdateGameRequest {
            winner_team_id: Some(a.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.winner_team_id, Some(a));

        let replacement = Uuid::new_v4();
        let request = UpdateGameRequest {
            team_a_id: Some(replacement.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.team_a_id, replacement);
        assert_eq!(game.winner_team_id, None);

        // A winner that is still playing survives the other side changing
        let request = UpdateGameRequest {
            winner_team_id: Some(b.to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        let request = UpdateGameRequest {
            team_a_id: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        };
        patch(&mut game, request).unwrap();
        assert_eq!(game.winner_team_id, Some(b));
    }

    #[test]
    fn blank_references_in_a_patch_are_rejected() {
        let invalid = [
            UpdateGameRequest { team_b_id: Some("".into()), ..Default::default() },
            UpdateGameRequest { sport_id: Some("  ".into()), ..Default::default() },
            UpdateGameRequest { team_a_id: Some(" ".into()), ..Default::default() },
            UpdateGameRequest { winner_team_id: Some("".into()), ..Default::default() },
        ];
        for request in invalid {
            assert!(matches!(GamePatch::parse(&request), Err(PortalError::Validation(_))));
        }
    }

    #[test]
    fn absent_fields_are_left_untouched() {
        let mut game = scheduled_game();
        let before = game.clone();
        patch(&mut game, UpdateGameRequest::default()).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn status_may_jump_to_any_value() {
        let mut game = scheduled_game();
        for status in ["Finished", "Scheduled", "Cancelled", "InProgress"] {
            let request = UpdateGameRequest {
                status: Some(status.into()),
                ..Default::default()
            };
            patch(&mut game, request).unwrap();
            assert_eq!(game.status.as_str(), status);
        }
    }

    #[test]
    fn invalid_patch_values_are_rejected() {
        let invalid = [
            UpdateGameRequest { status: Some("Postponed".into()), ..Default::default() },
            UpdateGameRequest { game_date: Some("soon".into()), ..Default::default() },
            UpdateGameRequest { score_a: Some(-1), ..Default::default() },
        ];
        for request in invalid {
            assert!(matches!(GamePatch::parse(&request), Err(PortalError::Validation(_))));
        }
    }
}
