//! Terminal line discipline handling.
//!
//! [`LineDiscipline`] abstracts the OS terminal settings so the cursor
//! location query can be exercised without a real terminal. [`CbreakGuard`]
//! saves the settings, switches to cbreak mode and restores the saved
//! settings on every exit path.

use std::io;

use tracing::{debug, warn};

/// Access to a terminal's line discipline settings.
pub trait LineDiscipline {
    type Settings: Clone;

    /// Read the current settings.
    fn get(&self) -> io::Result<Self::Settings>;

    /// Apply `settings` immediately.
    fn set(&self, settings: &Self::Settings) -> io::Result<()>;

    /// Derive cbreak settings from `settings`: no echo, no line buffering,
    /// reads return after a single byte.
    fn cbreak(settings: &Self::Settings) -> Self::Settings;
}

/// Guard that holds a terminal in cbreak mode.
///
/// Dropping the guard restores the saved settings. Use [`CbreakGuard::restore`]
/// to observe a restoration failure.
pub struct CbreakGuard<'a, D: LineDiscipline> {
    discipline: &'a D,
    original: Option<D::Settings>,
}

impl<'a, D: LineDiscipline> CbreakGuard<'a, D> {
    /// Save the current settings and enter cbreak mode.
    pub fn enter(discipline: &'a D) -> io::Result<Self> {
        let original = discipline.get()?;
        let cbreak = D::cbreak(&original);
        let guard = Self {
            discipline,
            original: Some(original),
        };
        // A failed switch still goes through Drop and restores.
        guard.discipline.set(&cbreak)?;
        debug!("Entered cbreak mode");
        Ok(guard)
    }

    /// Restore the saved settings, reporting any failure.
    pub fn restore(mut self) -> io::Result<()> {
        match self.original.take() {
            Some(original) => {
                self.discipline.set(&original)?;
                debug!("Restored terminal settings");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl<D: LineDiscipline> Drop for CbreakGuard<'_, D> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            match self.discipline.set(&original) {
                Ok(()) => debug!("Restored terminal settings"),
                Err(e) => warn!("Failed to restore terminal settings: {}", e),
            }
        }
    }
}

#[cfg(unix)]
pub use unix::Termios;

#[cfg(unix)]
mod unix {
    use std::io;
    use std::os::unix::io::RawFd;

    use super::LineDiscipline;

    /// POSIX termios settings of a terminal file descriptor.
    #[derive(Debug, Clone, Copy)]
    pub struct Termios {
        fd: RawFd,
    }

    impl Termios {
        pub fn new(fd: RawFd) -> Self {
            Self { fd }
        }
    }

    impl LineDiscipline for Termios {
        type Settings = libc::termios;

        fn get(&self) -> io::Result<libc::termios> {
            let mut termios = std::mem::MaybeUninit::<libc::termios>::uninit();
            let result = unsafe { libc::tcgetattr(self.fd, termios.as_mut_ptr()) };
            if result != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(unsafe { termios.assume_init() })
        }

        fn set(&self, settings: &libc::termios) -> io::Result<()> {
            let result = unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, settings) };
            if result != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(())
        }

        fn cbreak(settings: &libc::termios) -> libc::termios {
            let mut cbreak = *settings;
            cbreak.c_lflag &= !(libc::ECHO | libc::ICANON);
            cbreak.c_cc[libc::VMIN] = 1;
            cbreak.c_cc[libc::VTIME] = 0;
            cbreak
        }
    }
}
