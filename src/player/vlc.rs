use std::{
    io::ErrorKind,
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::{error::PlayerError, player::MediaPlayer};

#[cfg(target_os = "windows")]
const DETACHED_PROCESS: u32 = 0x0000_0008;

/// Launches VLC as a detached child process.
#[derive(Debug, Clone)]
pub struct Vlc {
    program: PathBuf,
    background: bool,
}

impl Vlc {
    /// `background` asks VLC to start minimised so no window is raised in
    /// front of the terminal.
    pub fn new(program: impl Into<PathBuf>, background: bool) -> Self {
        Self {
            program: program.into(),
            background,
        }
    }

    fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        if self.background {
            cmd.arg("--qt-start-minimized");
        }
        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            if self.background {
                cmd.creation_flags(DETACHED_PROCESS);
            }
        }

        cmd
    }
}

impl MediaPlayer for Vlc {
    fn name(&self) -> &str {
        "VLC"
    }

    fn play(&self, url: &str) -> Result<(), PlayerError> {
        match self.command(url).spawn() {
            // dropping the handle detaches; the player outlives us
            Ok(_child) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PlayerError::NotFound {
                player: self.name().to_string(),
                program: self.program.clone(),
            }),
            Err(e) => Err(PlayerError::Spawn {
                player: self.name().to_string(),
                program: self.program.clone(),
                source: e,
            }),
        }
    }
}
