pub mod audit;

use clap::Parser;
use nsprune_common::config::{Config, Credentials};

#[derive(Parser)]
#[command(name = "nsprune")]
#[command(about = "Lists potentially stale IP-named servers on a NetScaler appliance.")]
#[command(version)]
pub struct CommandLine {
    /// NetScaler management address
    pub address: String,
    /// NetScaler username
    pub username: String,
    /// NetScaler password
    pub password: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config::new(self.address, Credentials::new(self.username, self.password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_three_positionals_make_a_config() {
        let cli = CommandLine::try_parse_from(["nsprune", "10.10.10.5", "nsroot", "pw"]).unwrap();
        let cfg = cli.into_config();
        assert_eq!(cfg.device, "10.10.10.5");
        assert_eq!(cfg.credentials.username, "nsroot");
        assert_eq!(cfg.credentials.password, "pw");
    }

    #[test]
    fn test_all_positionals_required() {
        assert!(CommandLine::try_parse_from(["nsprune", "10.10.10.5", "nsroot"]).is_err());
        assert!(CommandLine::try_parse_from(["nsprune", "10.10.10.5", "nsroot", "pw", "extra"]).is_err());
    }
}
