#![allow(dead_code)]

use shotmap::config::DataPaths;
use shotmap::dataset::{ColumnSet, Dataset, JoinedShot, ShotEvent};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for joined shots to keep the tests readable.
pub struct ShotBuilder {
    shot: JoinedShot,
}

impl ShotBuilder {
    pub fn new(team: &str, season: i32) -> Self {
        Self {
            shot: JoinedShot {
                event: ShotEvent {
                    team_id: "t".to_string(),
                    game_id: "g".to_string(),
                    period_id: Some(1),
                    shot_location_x: Some(88.0),
                    shot_location_y: Some(50.0),
                    goal: Some(false),
                    own_goal: Some(false),
                    blocked: Some(false),
                    head: Some(false),
                    assist_through_ball: Some(false),
                    assist_cross: Some(false),
                    distance_from_goal_yds: Some(12.0),
                    shot_xg: Some(0.1),
                    game_minute: Some(30.0),
                    ..Default::default()
                },
                team_name: team.to_string(),
                season_name: season,
            },
        }
    }

    pub fn goal(mut self) -> Self {
        self.shot.event.goal = Some(true);
        self
    }

    pub fn own_goal(mut self) -> Self {
        self.shot.event.goal = Some(true);
        self.shot.event.own_goal = Some(true);
        self
    }

    pub fn blocked(mut self) -> Self {
        self.shot.event.blocked = Some(true);
        self
    }

    pub fn header(mut self) -> Self {
        self.shot.event.head = Some(true);
        self
    }

    pub fn through_ball(mut self) -> Self {
        self.shot.event.assist_through_ball = Some(true);
        self
    }

    pub fn cross(mut self) -> Self {
        self.shot.event.assist_cross = Some(true);
        self
    }

    pub fn period(mut self, p: u8) -> Self {
        self.shot.event.period_id = Some(p);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.shot.event.shot_location_x = Some(x);
        self.shot.event.shot_location_y = Some(y);
        self
    }

    pub fn distance(mut self, yds: f64) -> Self {
        self.shot.event.distance_from_goal_yds = Some(yds);
        self
    }

    pub fn xg(mut self, xg: f64) -> Self {
        self.shot.event.shot_xg = Some(xg);
        self
    }

    pub fn minute(mut self, m: f64) -> Self {
        self.shot.event.game_minute = Some(m);
        self
    }

    pub fn build(self) -> JoinedShot {
        self.shot
    }
}

pub fn dataset(shots: Vec<JoinedShot>) -> Dataset {
    Dataset {
        shots,
        columns: ColumnSet::all(),
        ..Default::default()
    }
}

/// Three CSV tables on disk shaped like the league API exports.
pub struct Fixture {
    pub dir: TempDir,
    pub shots: PathBuf,
    pub games: PathBuf,
    pub teams: PathBuf,
    pub logos: PathBuf,
}

pub const SHOTS_HEADER: &str = "game_id,period_id,team_id,shooter_player_id,assist_player_id,\
shot_location_x,shot_location_y,blocked_x,blocked_y,goal,own_goal,blocked,head,\
assist_through_ball,assist_cross,distance_from_goal_yds,shot_xg,shot_psxg,game_minute,\
home_score,away_score";

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let shots = dir.path().join("shots.csv");
        let games = dir.path().join("games.csv");
        let teams = dir.path().join("teams.csv");
        let logos = dir.path().join("Logos");
        std::fs::create_dir(&logos).unwrap();

        let mut f = File::create(&teams).unwrap();
        writeln!(f, "team_id,team_name,team_abbreviation").unwrap();
        writeln!(f, "ORL,Orlando Pride,ORL").unwrap();
        writeln!(f, "GOT,NJ/NY Gotham FC,NJY").unwrap();

        let mut f = File::create(&games).unwrap();
        writeln!(f, "game_id,season_name,home_team_id,away_team_id").unwrap();
        writeln!(f, "g1,2023,ORL,GOT").unwrap();
        writeln!(f, "g2,2024.0,GOT,ORL").unwrap();
        writeln!(f, "g3,,GOT,ORL").unwrap();

        let mut f = File::create(&shots).unwrap();
        writeln!(f, "{}", SHOTS_HEADER).unwrap();
        let rows = [
            // 2024 Orlando, first half
            "g2,1,ORL,p1,p2,90.1,48.0,,,True,False,False,False,True,False,9.5,0.31,0.5,12,0,0",
            "g2,1,ORL,p1,,85.0,55.0,,,False,False,True,True,False,True,12.0,0.12,,20,1,0",
            "g2,1,ORL,p3,p1,80.0,40.0,,,False,False,False,False,False,True,18.0,0.05,,33,1,0",
            "g2,1,ORL,p3,,92.0,50.0,,,False,False,False,False,False,False,12.0,0.22,,41,1,0",
            // 2024 Orlando, second half
            "g2,2,ORL,p1,,88.0,60.0,,,True,False,False,True,False,True,11.0,0.4,0.6,70,1,0",
            "g2,2,ORL,p2,,75.0,45.0,,,False,False,False,False,False,False,25.0,0.03,,81,2,0",
            // own goal credited to Orlando
            "g2,2,ORL,p9,,95.0,50.0,,,True,True,False,False,False,False,5.0,0.0,,88,2,0",
            // 2024 Gotham
            "g2,1,GOT,p7,,86.0,52.0,,,True,False,False,False,False,False,10.0,0.3,0.4,5,0,0",
            // 2023 Orlando
            "g1,1,ORL,p1,,87.0,51.0,,,False,False,False,False,False,False,14.0,0.1,,10,0,0",
            // unmatched team and season-less game
            "g2,1,XXX,p1,,87.0,51.0,,,False,False,False,False,False,False,14.0,0.1,,10,0,0",
            "g3,1,ORL,p1,,87.0,51.0,,,False,False,False,False,False,False,14.0,0.1,,10,0,0",
            // malformed flag
            "g2,1,ORL,p1,,87.0,51.0,,,maybe,False,False,False,False,False,14.0,0.1,,10,0,0",
        ];
        for r in rows {
            writeln!(f, "{}", r).unwrap();
        }

        Self {
            dir,
            shots,
            games,
            teams,
            logos,
        }
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths {
            shots: self.shots.clone(),
            games: self.games.clone(),
            teams: self.teams.clone(),
            logo_dir: self.logos.clone(),
            team_seasons: None,
        }
    }
}
