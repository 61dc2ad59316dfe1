use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{MinesweeperError, Result};

/// Board setup for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub nrows: usize,
    pub ncols: usize,
    pub nmines: usize,
    /// Fixes the mine layout and the solver's guesses when set.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig { nrows: 8, ncols: 8, nmines: 8, seed: None }
    }
}

impl GameConfig {
    ///
    /// Parse positional arguments: `[rows cols mines [seed]]`. No arguments gives the default
    /// 8 x 8 board with 8 mines.
    ///
    pub fn from_args<I, S>(args: I) -> Result<GameConfig>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut config = GameConfig::default();
        match args.len() {
            0 => {}
            3 | 4 => {
                config.nrows = parse_arg(args[0].as_ref(), "rows")?;
                config.ncols = parse_arg(args[1].as_ref(), "cols")?;
                config.nmines = parse_arg(args[2].as_ref(), "mines")?;
                if let Some(seed) = args.get(3) {
                    config.seed = Some(parse_arg(seed.as_ref(), "seed")?);
                }
            }
            n => {
                return Err(MinesweeperError::InvalidConfig(format!(
                    "expected arguments: [rows cols mines [seed]], got {} arguments", n
                )))
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.nrows == 0 || self.ncols == 0 {
            return Err(MinesweeperError::InvalidConfig(format!(
                "board must have at least one row and column, got {} x {}", self.nrows, self.ncols
            )));
        }
        let ncells = self.nrows * self.ncols;
        if self.nmines > ncells {
            return Err(MinesweeperError::TooManyMines { nmines: self.nmines, ncells });
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_arg<T: std::str::FromStr>(arg: &str, name: &str) -> Result<T> {
    arg.trim().parse::<T>().map_err(|_| {
        MinesweeperError::InvalidConfig(format!("could not parse {} from {:?}", name, arg))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let no_args: [&str; 0] = [];
        assert_eq!(GameConfig::default(), GameConfig::from_args(no_args).unwrap());
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            GameConfig { nrows: 16, ncols: 30, nmines: 99, seed: Some(42) },
            GameConfig::from_args(["16", "30", "99", "42"]).unwrap()
        );
        assert_eq!(
            GameConfig { nrows: 9, ncols: 9, nmines: 10, seed: None },
            GameConfig::from_args(["9", "9", "10"]).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_args() {
        assert!(GameConfig::from_args(["9", "9"]).is_err());
        assert!(GameConfig::from_args(["9", "x", "10"]).is_err());
        assert!(GameConfig::from_args(["0", "9", "0"]).is_err());
        assert_eq!(
            Err(MinesweeperError::TooManyMines { nmines: 10, ncells: 9 }),
            GameConfig::from_args(["3", "3", "10"])
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let config = GameConfig { seed: Some(9), ..GameConfig::default() };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
