use log::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub producers: usize,
    pub level: Level,
    /// Arguments that could not be used, reported once logging is up.
    pub rejected: Vec<String>,
}
impl Default for Config {
    fn default() -> Config {
        Config {
            producers: 4,
            level: Level::Info,
            rejected: vec![],
        }
    }
}
impl Config {
    /// Reads `[producers] [log-level]`, keeping defaults for anything missing
    /// or malformed.
    pub fn new<I: IntoIterator<Item = String>>(args: I) -> Config {
        let mut c = Config::default();
        let mut args = args.into_iter();
        if let Some(arg) = args.next() {
            match arg.parse::<usize>() {
                Ok(n) if n > 0 => c.producers = n,
                _ => c.rejected.push(format!("producer count {:?}", arg)),
            }
        }
        if let Some(arg) = args.next() {
            match arg.parse::<Level>() {
                Ok(level) => c.level = level,
                Err(_) => c.rejected.push(format!("log level {:?}", arg)),
            }
        }
        c.rejected.extend(args.map(|arg| format!("extra argument {:?}", arg)));
        c
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use log::Level;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        assert_eq!(Config::new(args(&[])), Config::default());
    }

    #[test]
    fn positional_arguments() {
        let c = Config::new(args(&["9", "trace"]));
        assert_eq!((c.producers, c.level), (9, Level::Trace));
        assert!(c.rejected.is_empty());
    }

    #[test]
    fn malformed_arguments_keep_defaults() {
        let c = Config::new(args(&["0", "loud", "extra"]));
        assert_eq!((c.producers, c.level), (4, Level::Info));
        assert_eq!(c.rejected.len(), 3);
    }
}
