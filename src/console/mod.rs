//! Console commands for saving and loading the scene that owns the shapes.
//!
//! The remembered save path lives in a [`ConsoleSession`] owned by the
//! caller, and `quit` is reported back instead of exiting the process.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

/// Names accepted by [`Command::from_str`].
pub const COMMAND_NAMES: [&str; 4] = ["save", "load", "exit", "quit"];

/// Persistence boundary implemented by the scene owner.
pub trait SceneStore {
    fn save_scene(&mut self, path: &Path) -> anyhow::Result<()>;

    fn load_scene(&mut self, path: &Path) -> anyhow::Result<()>;

    /// Pause or resume stepping. Called before a load.
    fn set_paused(&mut self, _paused: bool) {}
}

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ConsoleError::Empty)?;
        let path = words.next().map(PathBuf::from);

        match name {
            "save" => Ok(Command::Save(path)),
            "load" => Ok(Command::Load(path)),
            "exit" | "quit" => Ok(Command::Quit),
            other => Err(ConsoleError::UnknownCommand(other.to_string())),
        }
    }
}

/// Result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Saved(PathBuf),
    Loaded(PathBuf),
    /// No path given and none remembered. Carries the usage line.
    Usage(&'static str),
    /// The caller should stop its main loop.
    Quit,
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("scene error: {0}")]
    Scene(#[from] anyhow::Error),
}

/// Console state carried between commands.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSession {
    last_save: Option<PathBuf>,
}

impl ConsoleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the last successful save or load.
    pub fn last_save(&self) -> Option<&Path> {
        self.last_save.as_deref()
    }

    /// Parse and run one console line against `scene`.
    pub fn execute<S: SceneStore>(
        &mut self,
        scene: &mut S,
        line: &str,
    ) -> Result<CommandOutcome, ConsoleError> {
        let command: Command = line.parse()?;
        debug!(?command, "console command");
        self.run(scene, command)
    }

    pub fn run<S: SceneStore>(
        &mut self,
        scene: &mut S,
        command: Command,
    ) -> Result<CommandOutcome, ConsoleError> {
        match command {
            Command::Save(path) => {
                let Some(path) = path.or_else(|| self.last_save.clone()) else {
                    return Ok(CommandOutcome::Usage("save <filename>"));
                };
                info!(path = %path.display(), "saving scene");
                scene.save_scene(&path)?;
                self.last_save = Some(path.clone());
                Ok(CommandOutcome::Saved(path))
            }
            Command::Load(path) => {
                let Some(path) = path.or_else(|| self.last_save.clone()) else {
                    return Ok(CommandOutcome::Usage("load <filename>"));
                };
                info!(path = %path.display(), "loading scene");
                scene.set_paused(true);
                scene.load_scene(&path)?;
                self.last_save = Some(path.clone());
                Ok(CommandOutcome::Loaded(path))
            }
            Command::Quit => Ok(CommandOutcome::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockScene {
        saved: Vec<PathBuf>,
        loaded: Vec<PathBuf>,
        paused: bool,
        fail: bool,
    }

    impl SceneStore for MockScene {
        fn save_scene(&mut self, path: &Path) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("disk full");
            }
            self.saved.push(path.to_path_buf());
            Ok(())
        }

        fn load_scene(&mut self, path: &Path) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("no such file");
            }
            self.loaded.push(path.to_path_buf());
            Ok(())
        }

        fn set_paused(&mut self, paused: bool) {
            self.paused = paused;
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "save scene.json".parse::<Command>().unwrap(),
            Command::Save(Some(PathBuf::from("scene.json")))
        );
        assert_eq!("load".parse::<Command>().unwrap(), Command::Load(None));
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("  exit  ".parse::<Command>().unwrap(), Command::Quit);
        assert!(matches!("".parse::<Command>(), Err(ConsoleError::Empty)));
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(ConsoleError::UnknownCommand(name)) if name == "jump"
        ));
    }

    #[test]
    fn test_command_names_parse() {
        for name in COMMAND_NAMES {
            assert!(name.parse::<Command>().is_ok());
        }
    }

    #[test]
    fn test_save_without_path_needs_history() {
        let mut session = ConsoleSession::new();
        let mut scene = MockScene::default();
        let outcome = session.execute(&mut scene, "save").unwrap();
        assert_eq!(outcome, CommandOutcome::Usage("save <filename>"));
        assert!(scene.saved.is_empty());
    }

    #[test]
    fn test_save_remembers_path() {
        let mut session = ConsoleSession::new();
        let mut scene = MockScene::default();

        session.execute(&mut scene, "save a.scene").unwrap();
        assert_eq!(session.last_save(), Some(Path::new("a.scene")));

        let outcome = session.execute(&mut scene, "save").unwrap();
        assert_eq!(outcome, CommandOutcome::Saved(PathBuf::from("a.scene")));
        assert_eq!(scene.saved.len(), 2);
    }

    #[test]
    fn test_load_pauses_and_falls_back() {
        let mut session = ConsoleSession::new();
        let mut scene = MockScene::default();
        assert_eq!(
            session.execute(&mut scene, "load").unwrap(),
            CommandOutcome::Usage("load <filename>")
        );

        session.execute(&mut scene, "save b.scene").unwrap();
        let outcome = session.execute(&mut scene, "load").unwrap();
        assert_eq!(outcome, CommandOutcome::Loaded(PathBuf::from("b.scene")));
        assert!(scene.paused);
    }

    #[test]
    fn test_failure_keeps_previous_path() {
        let mut session = ConsoleSession::new();
        let mut scene = MockScene::default();
        session.execute(&mut scene, "save good.scene").unwrap();

        scene.fail = true;
        let err = session.execute(&mut scene, "save bad.scene").unwrap_err();
        assert!(matches!(err, ConsoleError::Scene(_)));
        assert_eq!(session.last_save(), Some(Path::new("good.scene")));
    }

    #[test]
    fn test_quit() {
        let mut session = ConsoleSession::new();
        let mut scene = MockScene::default();
        assert_eq!(
            session.execute(&mut scene, "exit").unwrap(),
            CommandOutcome::Quit
        );
    }
}
