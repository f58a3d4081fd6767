use std::path::PathBuf;

use anyhow::{Context, Result};

/// Command line: `ribbon-studio [OUTPUT.png] [WIDTH] [HEIGHT]`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioArgs {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for StudioArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("ribbon.png"),
            width: 800,
            height: 600,
        }
    }
}

impl StudioArgs {
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        let mut args = args.into_iter();

        if let Some(path) = args.next() {
            out.output = PathBuf::from(path.as_ref());
        }
        if let Some(w) = args.next() {
            out.width = w.as_ref().parse().with_context(|| format!("invalid width {:?}", w.as_ref()))?;
        }
        if let Some(h) = args.next() {
            out.height = h.as_ref().parse().with_context(|| format!("invalid height {:?}", h.as_ref()))?;
        }
        anyhow::ensure!(args.next().is_none(), "usage: ribbon-studio [OUTPUT.png] [WIDTH] [HEIGHT]");
        Ok(out)
    }
}
