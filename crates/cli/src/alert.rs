use std::io::{self, IsTerminal, Write};

use liftlog_domain::{Alert, AlertError, Fallback};

/// Rings the terminal bell.
pub struct Bell<W> {
    out: W,
    beeps: u32,
    interactive: bool,
}

impl Bell<io::Stdout> {
    pub fn stdout(beeps: u32) -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self {
            out,
            beeps,
            interactive,
        }
    }
}

impl<W: Write> Alert for Bell<W> {
    fn alert(&mut self) -> Result<(), AlertError> {
        if !self.interactive {
            return Err(AlertError::Unavailable(String::from("not a terminal")));
        }
        if self.beeps == 0 {
            return Err(AlertError::Unavailable(String::from("beeps disabled")));
        }
        for _ in 0..self.beeps {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Prints a notice when the bell cannot be heard.
pub struct Banner<W> {
    out: W,
}

impl Banner<io::Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> Alert for Banner<W> {
    fn alert(&mut self) -> Result<(), AlertError> {
        writeln!(self.out, "\n*** Rest is over ***")?;
        Ok(())
    }
}

pub type TerminalAlert = Fallback<Bell<io::Stdout>, Banner<io::Stderr>>;

pub fn terminal(beeps: u32) -> TerminalAlert {
    Fallback::new(Bell::stdout(beeps), Banner::stderr())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn alert(beeps: u32, interactive: bool) -> Fallback<Bell<Vec<u8>>, Banner<Vec<u8>>> {
        Fallback::new(
            Bell {
                out: vec![],
                beeps,
                interactive,
            },
            Banner { out: vec![] },
        )
    }

    #[test]
    fn test_bell_rings_configured_beeps() {
        let mut alert = alert(3, true);
        alert.alert().unwrap();
        assert_eq!(alert.primary.out, b"\x07\x07\x07");
        assert!(alert.fallback.out.is_empty());
    }

    #[test]
    fn test_banner_without_terminal() {
        let mut alert = alert(3, false);
        alert.alert().unwrap();
        assert!(alert.primary.out.is_empty());
        assert_eq!(
            String::from_utf8(alert.fallback.out).unwrap(),
            "\n*** Rest is over ***\n"
        );
    }

    #[test]
    fn test_banner_when_beeps_disabled() {
        let mut alert = alert(0, true);
        alert.alert().unwrap();
        assert!(!alert.fallback.out.is_empty());
    }
}
