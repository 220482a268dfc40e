//! The game director — the progression state machine over screens.
//!
//! Owns the persistent campaign profile and audio settings, and the
//! live session while one exists. Commands are queued and processed at
//! the next tick boundary; each tick produces one `FrameSnapshot`.

use std::collections::VecDeque;
use std::path::PathBuf;

use glam::Vec2;

use nightswarm_campaign::profile::{CampaignProfile, DeathPolicy};
use nightswarm_campaign::settings::{self, AudioSettings};
use nightswarm_campaign::shop::{self, ShopItem};
use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::constants::VOLUME_STEP;
use nightswarm_core::enums::SessionOutcome;
use nightswarm_core::events::{AudioEvent, GameEvent};
use nightswarm_core::levels::{campaign_levels, Level};
use nightswarm_core::state::{FrameSnapshot, ScreenView, SessionView, ShopEntryView};
use nightswarm_core::types::FrameTime;
use nightswarm_sim::{SessionConfig, SessionEngine};

/// Main menu entries: Start Game, Settings, Skill Tree, Quit.
const MAIN_MENU_OPTIONS: usize = 4;
/// Settings entries: Music Volume, SFX Volume, Back.
const SETTINGS_OPTIONS: usize = 3;
/// Shop entries: the purchasable items plus Next Level.
const SHOP_OPTIONS: usize = ShopItem::ALL.len() + 1;

/// Configuration for a director.
#[derive(Debug, Clone)]
pub struct DirectorConfig {
    /// Base RNG seed; each session derives its own from this and the
    /// level index.
    pub seed: u64,
    pub death_policy: DeathPolicy,
    /// Where the audio settings live. `None` disables persistence.
    pub settings_path: Option<PathBuf>,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            death_policy: DeathPolicy::default(),
            settings_path: None,
        }
    }
}

/// Which screen is active, with its cursor where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu { selected: usize },
    Settings { selected: usize },
    SkillTree,
    Game,
    Shop { selected: usize },
    Death,
}

/// The director. Owns all campaign state and the live session.
pub struct GameDirector {
    config: DirectorConfig,
    profile: CampaignProfile,
    settings: AudioSettings,
    levels: Vec<Level>,
    screen: Screen,
    session: Option<SessionEngine>,
    command_queue: VecDeque<PlayerCommand>,
    running: bool,
}

impl GameDirector {
    /// Create a director over the built-in campaign.
    pub fn new(config: DirectorConfig) -> Self {
        Self::with_levels(config, campaign_levels())
    }

    /// Create a director over a custom level table. The table must hold
    /// at least one level.
    pub fn with_levels(config: DirectorConfig, levels: Vec<Level>) -> Self {
        debug_assert!(!levels.is_empty(), "level table must not be empty");
        let settings = config
            .settings_path
            .as_deref()
            .map(settings::load)
            .unwrap_or_default();

        Self {
            config,
            profile: CampaignProfile::default(),
            settings,
            levels,
            screen: Screen::MainMenu { selected: 0 },
            session: None,
            command_queue: VecDeque::new(),
            running: true,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame: drain commands, step the live session if one
    /// exists, resolve its outcome, and snapshot everything.
    pub fn tick(&mut self, time: FrameTime) -> FrameSnapshot {
        let mut events = Vec::new();
        let mut audio_events = Vec::new();
        self.process_commands(time, &mut events, &mut audio_events);

        let mut session_view = None;
        if self.screen == Screen::Game {
            if let Some(session) = self.session.as_mut() {
                let frame = session.tick(time);
                let outcome = session.outcome();

                for event in &frame.events {
                    if let GameEvent::EnemyKilled { xp_value, .. } = event {
                        self.profile.points += *xp_value;
                    }
                }
                events.extend(frame.events);
                audio_events.extend(frame.audio_events);
                session_view = Some(frame.view);

                match outcome {
                    Some(SessionOutcome::LevelCleared) => {
                        self.session = None;
                        session_view = None;
                        self.screen = Screen::Shop { selected: 0 };
                    }
                    Some(SessionOutcome::PlayerDied) => {
                        self.session = None;
                        session_view = None;
                        self.profile.apply_death_policy(self.config.death_policy);
                        self.screen = Screen::Death;
                    }
                    None => {}
                }
            }
        }

        self.build_snapshot(time, session_view, events, audio_events)
    }

    /// Whether the director is still alive (Quit ends it).
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn profile(&self) -> &CampaignProfile {
        &self.profile
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    #[cfg(test)]
    pub(crate) fn profile_mut(&mut self) -> &mut CampaignProfile {
        &mut self.profile
    }

    fn process_commands(
        &mut self,
        time: FrameTime,
        events: &mut Vec<GameEvent>,
        audio_events: &mut Vec<AudioEvent>,
    ) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, time, events, audio_events);
        }
    }

    fn handle_command(
        &mut self,
        command: PlayerCommand,
        time: FrameTime,
        events: &mut Vec<GameEvent>,
        audio_events: &mut Vec<AudioEvent>,
    ) {
        if command == PlayerCommand::Quit {
            self.running = false;
            return;
        }

        match self.screen {
            Screen::MainMenu { selected } => self.main_menu_command(command, selected, time),
            Screen::Settings { selected } => self.settings_command(command, selected),
            Screen::SkillTree => {
                if command == PlayerCommand::Back {
                    self.screen = Screen::MainMenu { selected: 0 };
                }
            }
            Screen::Game => self.game_command(command),
            Screen::Shop { selected } => {
                self.shop_command(command, selected, time, events, audio_events)
            }
            Screen::Death => {
                if command == PlayerCommand::Continue {
                    self.screen = Screen::MainMenu { selected: 0 };
                }
            }
        }
    }

    fn main_menu_command(&mut self, command: PlayerCommand, selected: usize, time: FrameTime) {
        match command {
            PlayerCommand::MenuUp => {
                self.screen = Screen::MainMenu {
                    selected: wrap_up(selected, MAIN_MENU_OPTIONS),
                };
            }
            PlayerCommand::MenuDown => {
                self.screen = Screen::MainMenu {
                    selected: wrap_down(selected, MAIN_MENU_OPTIONS),
                };
            }
            PlayerCommand::Select => match selected {
                0 => self.start_session(time),
                1 => self.screen = Screen::Settings { selected: 0 },
                2 => self.screen = Screen::SkillTree,
                3 => self.running = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn settings_command(&mut self, command: PlayerCommand, selected: usize) {
        match command {
            PlayerCommand::MenuUp => {
                self.screen = Screen::Settings {
                    selected: wrap_up(selected, SETTINGS_OPTIONS),
                };
            }
            PlayerCommand::MenuDown => {
                self.screen = Screen::Settings {
                    selected: wrap_down(selected, SETTINGS_OPTIONS),
                };
            }
            PlayerCommand::MenuLeft => self.adjust_volume(selected, -VOLUME_STEP),
            PlayerCommand::MenuRight => self.adjust_volume(selected, VOLUME_STEP),
            PlayerCommand::Select if selected == 2 => {
                self.screen = Screen::MainMenu { selected: 0 };
            }
            PlayerCommand::Back => {
                self.screen = Screen::MainMenu { selected: 0 };
            }
            _ => {}
        }
    }

    fn adjust_volume(&mut self, selected: usize, amount: f32) {
        match selected {
            0 => {
                self.settings.music_volume = (self.settings.music_volume + amount).clamp(0.0, 1.0);
            }
            1 => {
                self.settings.sfx_volume = (self.settings.sfx_volume + amount).clamp(0.0, 1.0);
            }
            _ => return,
        }
        if let Some(path) = &self.config.settings_path {
            let _ = settings::save(path, &self.settings);
        }
    }

    fn game_command(&mut self, command: PlayerCommand) {
        match command {
            // Abandon the session; campaign progress is untouched.
            PlayerCommand::Back => {
                self.session = None;
                self.screen = Screen::MainMenu { selected: 0 };
            }
            PlayerCommand::SetMoveDirection { x, y } => {
                if let Some(session) = self.session.as_mut() {
                    session.set_move_direction(Vec2::new(x, y));
                }
            }
            PlayerCommand::SetFiring { firing } => {
                if let Some(session) = self.session.as_mut() {
                    session.set_firing(firing);
                }
            }
            _ => {}
        }
    }

    fn shop_command(
        &mut self,
        command: PlayerCommand,
        selected: usize,
        time: FrameTime,
        events: &mut Vec<GameEvent>,
        audio_events: &mut Vec<AudioEvent>,
    ) {
        match command {
            PlayerCommand::MenuUp => {
                self.screen = Screen::Shop {
                    selected: wrap_up(selected, SHOP_OPTIONS),
                };
            }
            PlayerCommand::MenuDown => {
                self.screen = Screen::Shop {
                    selected: wrap_down(selected, SHOP_OPTIONS),
                };
            }
            PlayerCommand::Select => {
                if selected < ShopItem::ALL.len() {
                    if shop::purchase(&mut self.profile, ShopItem::ALL[selected]).is_err() {
                        audio_events.push(AudioEvent::Denied);
                    }
                } else {
                    self.profile.level_index += 1;
                    if self.profile.level_index >= self.levels.len() {
                        events.push(GameEvent::GameCompleted);
                        self.screen = Screen::MainMenu { selected: 0 };
                    } else {
                        self.start_session(time);
                    }
                }
            }
            _ => {}
        }
    }

    /// Spin up a fresh session at the profile's level. An index past the
    /// table replays the last level.
    fn start_session(&mut self, time: FrameTime) {
        let level_index = self.profile.level_index.min(self.levels.len() - 1);
        self.session = Some(SessionEngine::new(
            SessionConfig {
                level: self.levels[level_index].clone(),
                level_index,
                stats: self.profile.stats,
                seed: self.config.seed.wrapping_add(level_index as u64),
            },
            time.now_ms,
        ));
        self.screen = Screen::Game;
    }

    fn build_snapshot(
        &self,
        time: FrameTime,
        session: Option<SessionView>,
        events: Vec<GameEvent>,
        audio_events: Vec<AudioEvent>,
    ) -> FrameSnapshot {
        FrameSnapshot {
            time,
            screen: self.screen_view(),
            points: self.profile.points,
            stats: self.profile.stats,
            level_index: self.profile.level_index,
            level_count: self.levels.len(),
            music_volume: self.settings.music_volume,
            sfx_volume: self.settings.sfx_volume,
            session,
            events,
            audio_events,
        }
    }

    fn screen_view(&self) -> ScreenView {
        match self.screen {
            Screen::MainMenu { selected } => ScreenView::MainMenu { selected },
            Screen::Settings { selected } => ScreenView::Settings { selected },
            Screen::SkillTree => ScreenView::SkillTree,
            Screen::Game => ScreenView::Game,
            Screen::Shop { selected } => ScreenView::Shop {
                selected,
                entries: self.shop_entries(),
            },
            Screen::Death => ScreenView::Death,
        }
    }

    fn shop_entries(&self) -> Vec<ShopEntryView> {
        let mut entries: Vec<ShopEntryView> = ShopItem::ALL
            .iter()
            .map(|item| ShopEntryView {
                label: item.label().to_string(),
                cost: item.cost(),
                affordable: self.profile.points >= item.cost(),
            })
            .collect();
        entries.push(ShopEntryView {
            label: "Next Level".to_string(),
            cost: 0,
            affordable: true,
        });
        entries
    }
}

fn wrap_up(selected: usize, count: usize) -> usize {
    (selected + count - 1) % count
}

fn wrap_down(selected: usize, count: usize) -> usize {
    (selected + 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    use nightswarm_core::enums::EnemyArchetype;
    use nightswarm_core::levels::Wave;

    const STEP_MS: u64 = 50;

    fn tick_at(director: &mut GameDirector, now_ms: u64) -> FrameSnapshot {
        director.tick(FrameTime::new(now_ms, STEP_MS as f32 / 1000.0))
    }

    /// A one-wave level that clears by itself after a second (nothing
    /// ever spawns).
    fn trivial_level() -> Level {
        Level {
            waves: vec![Wave {
                duration_secs: 1,
                spawn_interval_ms: 300,
                enemy_type: EnemyArchetype::Bat,
                spawn_amount: 1,
            }],
            spawn_points: Vec::new(),
            player_start: Vec2::ZERO,
        }
    }

    /// A level whose single bat spawns in front of the 8-way burst and
    /// dies to it, worth 10 points.
    fn one_kill_level() -> Level {
        Level {
            waves: vec![Wave {
                duration_secs: 1,
                spawn_interval_ms: 60_000,
                enemy_type: EnemyArchetype::Bat,
                spawn_amount: 1,
            }],
            spawn_points: vec![Vec2::new(150.0, 0.0)],
            player_start: Vec2::ZERO,
        }
    }

    /// A level that pours enemies directly onto the player.
    fn lethal_level() -> Level {
        Level {
            waves: vec![Wave {
                duration_secs: 30,
                spawn_interval_ms: 300,
                enemy_type: EnemyArchetype::Bat,
                spawn_amount: 2,
            }],
            spawn_points: vec![Vec2::ZERO],
            player_start: Vec2::ZERO,
        }
    }

    /// Run until the given screen shows up, returning the time it did.
    fn run_to_screen(
        director: &mut GameDirector,
        is_target: impl Fn(&ScreenView) -> bool,
        max_ms: u64,
    ) -> u64 {
        for step in 0..=(max_ms / STEP_MS) {
            let now = step * STEP_MS;
            let snapshot = tick_at(director, now);
            if is_target(&snapshot.screen) {
                return now;
            }
        }
        panic!("screen never appeared within {max_ms}ms");
    }

    #[test]
    fn starts_on_main_menu() {
        let mut director = GameDirector::new(DirectorConfig::default());
        let snapshot = tick_at(&mut director, 0);
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 0 });
        assert!(snapshot.session.is_none());
        assert_eq!(snapshot.points, 0);
        assert_eq!(snapshot.level_count, 2);
        assert!(director.is_running());
    }

    #[test]
    fn menu_cursor_wraps_both_ways() {
        let mut director = GameDirector::new(DirectorConfig::default());

        director.queue_command(PlayerCommand::MenuUp);
        let snapshot = tick_at(&mut director, 0);
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 3 });

        director.queue_command(PlayerCommand::MenuDown);
        let snapshot = tick_at(&mut director, 50);
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 0 });
    }

    #[test]
    fn start_game_creates_session() {
        let mut director = GameDirector::new(DirectorConfig::default());
        director.queue_command(PlayerCommand::Select);
        let snapshot = tick_at(&mut director, 0);

        assert_eq!(snapshot.screen, ScreenView::Game);
        let session = snapshot.session.expect("session view while in game");
        assert_eq!(session.player.hp, 100);
        assert_eq!(session.wave.wave_number, 1);
    }

    #[test]
    fn escape_abandons_session_without_touching_progress() {
        let mut director = GameDirector::new(DirectorConfig::default());
        director.queue_command(PlayerCommand::Select);
        tick_at(&mut director, 0);

        director.queue_command(PlayerCommand::Back);
        let snapshot = tick_at(&mut director, 50);
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 0 });
        assert!(snapshot.session.is_none());
        assert_eq!(snapshot.points, 0);
        assert_eq!(snapshot.level_index, 0);
    }

    #[test]
    fn quit_stops_the_director() {
        let mut director = GameDirector::new(DirectorConfig::default());
        director.queue_command(PlayerCommand::Quit);
        tick_at(&mut director, 0);
        assert!(!director.is_running());
    }

    #[test]
    fn quit_menu_entry_stops_the_director() {
        let mut director = GameDirector::new(DirectorConfig::default());
        // Quit is the last main-menu entry; MenuUp wraps straight to it.
        director.queue_commands([PlayerCommand::MenuUp, PlayerCommand::Select]);
        tick_at(&mut director, 0);
        assert!(!director.is_running());
    }

    #[test]
    fn skill_tree_round_trip() {
        let mut director = GameDirector::new(DirectorConfig::default());
        director.queue_commands([
            PlayerCommand::MenuDown,
            PlayerCommand::MenuDown,
            PlayerCommand::Select,
        ]);
        let snapshot = tick_at(&mut director, 0);
        assert_eq!(snapshot.screen, ScreenView::SkillTree);

        director.queue_command(PlayerCommand::Back);
        let snapshot = tick_at(&mut director, 50);
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 0 });
    }

    #[test]
    fn clearing_a_level_routes_to_shop_exactly_once() {
        let mut director = GameDirector::with_levels(
            DirectorConfig::default(),
            vec![trivial_level(), trivial_level()],
        );
        director.queue_command(PlayerCommand::Select);

        let mut cleared = 0;
        let mut shop_at = None;
        for step in 0..=(3_000 / STEP_MS) {
            let now = step * STEP_MS;
            let snapshot = tick_at(&mut director, now);
            cleared += snapshot
                .events
                .iter()
                .filter(|event| matches!(event, GameEvent::LevelCleared { .. }))
                .count();
            if shop_at.is_none() && matches!(snapshot.screen, ScreenView::Shop { .. }) {
                shop_at = Some(now);
            }
        }

        assert_eq!(cleared, 1);
        assert_eq!(shop_at, Some(1000));
        // And it stays in the shop.
        let snapshot = tick_at(&mut director, 4_000);
        assert!(matches!(snapshot.screen, ScreenView::Shop { .. }));
        assert!(snapshot.session.is_none());
    }

    #[test]
    fn kills_fund_the_profile() {
        let mut director =
            GameDirector::with_levels(DirectorConfig::default(), vec![one_kill_level()]);
        director.queue_command(PlayerCommand::Select);

        run_to_screen(
            &mut director,
            |screen| matches!(screen, ScreenView::Shop { .. }),
            3_000,
        );
        assert_eq!(director.profile().points, 10);
    }

    #[test]
    fn shop_purchase_applies_and_denial_is_flagged() {
        let mut director = GameDirector::with_levels(
            DirectorConfig::default(),
            vec![trivial_level(), trivial_level()],
        );
        director.queue_command(PlayerCommand::Select);
        run_to_screen(
            &mut director,
            |screen| matches!(screen, ScreenView::Shop { .. }),
            3_000,
        );
        director.profile_mut().points = 150;

        // Hover Max HP (second entry) and buy it.
        director.queue_commands([PlayerCommand::MenuDown, PlayerCommand::Select]);
        let snapshot = tick_at(&mut director, 2_000);
        assert_eq!(snapshot.points, 50);
        assert_eq!(snapshot.stats.max_hp, 120);
        assert!(snapshot.audio_events.is_empty());
        match &snapshot.screen {
            ScreenView::Shop { entries, .. } => {
                // 50 points no longer afford the 100-point entry.
                assert!(!entries[1].affordable);
                // Next Level is always available.
                assert!(entries[3].affordable);
            }
            other => panic!("expected shop, got {other:?}"),
        }

        // Buying it again with 50 points is denied and changes nothing.
        director.queue_command(PlayerCommand::Select);
        let snapshot = tick_at(&mut director, 2_050);
        assert!(snapshot.audio_events.contains(&AudioEvent::Denied));
        assert_eq!(snapshot.points, 50);
        assert_eq!(snapshot.stats.max_hp, 120);
    }

    #[test]
    fn next_level_starts_a_fresh_session() {
        let mut director = GameDirector::with_levels(
            DirectorConfig::default(),
            vec![trivial_level(), trivial_level()],
        );
        director.queue_command(PlayerCommand::Select);
        run_to_screen(
            &mut director,
            |screen| matches!(screen, ScreenView::Shop { .. }),
            3_000,
        );

        // Next Level is the last shop entry; MenuUp wraps straight to it.
        director.queue_commands([PlayerCommand::MenuUp, PlayerCommand::Select]);
        let snapshot = tick_at(&mut director, 2_000);
        assert_eq!(snapshot.screen, ScreenView::Game);
        assert_eq!(snapshot.level_index, 1);
        assert!(snapshot.session.is_some());
    }

    #[test]
    fn completing_the_last_level_returns_to_menu() {
        let mut director =
            GameDirector::with_levels(DirectorConfig::default(), vec![trivial_level()]);
        director.queue_command(PlayerCommand::Select);
        run_to_screen(
            &mut director,
            |screen| matches!(screen, ScreenView::Shop { .. }),
            3_000,
        );

        director.queue_commands([PlayerCommand::MenuUp, PlayerCommand::Select]);
        let snapshot = tick_at(&mut director, 2_000);
        assert!(snapshot.events.contains(&GameEvent::GameCompleted));
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 0 });
        assert_eq!(snapshot.level_index, 1);
        assert!(director.is_running());
    }

    #[test]
    fn death_routes_to_death_screen_and_keeps_progress() {
        let mut director =
            GameDirector::with_levels(DirectorConfig::default(), vec![lethal_level()]);
        director.queue_commands([
            PlayerCommand::Select,
            PlayerCommand::SetFiring { firing: false },
        ]);

        let mut died = 0;
        let mut death_screen_seen = false;
        for step in 0..=(6_000 / STEP_MS) {
            let snapshot = tick_at(&mut director, step * STEP_MS);
            died += snapshot
                .events
                .iter()
                .filter(|event| matches!(event, GameEvent::PlayerDied))
                .count();
            if snapshot.screen == ScreenView::Death {
                death_screen_seen = true;
            }
        }
        assert_eq!(died, 1);
        assert!(death_screen_seen);
        // KeepProgress: level index and points survive the death.
        assert_eq!(director.profile().level_index, 0);

        director.queue_command(PlayerCommand::Continue);
        let snapshot = tick_at(&mut director, 7_000);
        assert_eq!(snapshot.screen, ScreenView::MainMenu { selected: 0 });
    }

    #[test]
    fn volume_adjustments_clamp_and_persist() {
        let path = std::env::temp_dir()
            .join("nightswarm_test_director")
            .join("settings.json");
        let _ = std::fs::remove_file(&path);
        let config = DirectorConfig {
            settings_path: Some(path.clone()),
            ..Default::default()
        };

        let mut director = GameDirector::new(config.clone());
        // Main menu -> Settings, then raise music volume twice.
        director.queue_commands([
            PlayerCommand::MenuDown,
            PlayerCommand::Select,
            PlayerCommand::MenuRight,
            PlayerCommand::MenuRight,
        ]);
        let snapshot = tick_at(&mut director, 0);
        assert_eq!(snapshot.screen, ScreenView::Settings { selected: 0 });
        assert!((snapshot.music_volume - 0.7).abs() < 1e-5);

        // Clamps at 1.0 no matter how far it's pushed.
        director.queue_commands(std::iter::repeat(PlayerCommand::MenuRight).take(10));
        let snapshot = tick_at(&mut director, 50);
        assert_eq!(snapshot.music_volume, 1.0);

        // A new director over the same file sees the saved value.
        let director = GameDirector::new(config);
        assert_eq!(director.settings().music_volume, 1.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn sfx_volume_adjusts_on_second_row() {
        let mut director = GameDirector::new(DirectorConfig::default());
        director.queue_commands([
            PlayerCommand::MenuDown,
            PlayerCommand::Select,
            PlayerCommand::MenuDown,
            PlayerCommand::MenuLeft,
        ]);
        let snapshot = tick_at(&mut director, 0);
        assert_eq!(snapshot.screen, ScreenView::Settings { selected: 1 });
        // 0.1 - 0.1 clamps to the floor.
        assert!(snapshot.sfx_volume.abs() < 1e-5);
    }

    #[test]
    fn snapshot_serializes() {
        let mut director = GameDirector::new(DirectorConfig::default());
        director.queue_command(PlayerCommand::Select);
        let snapshot = tick_at(&mut director, 0);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"screen\""));
        assert!(json.contains("\"session\""));
    }
}
