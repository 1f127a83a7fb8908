use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile to read the server address from. Default is 'default'.
    /// If the profile is not configured, the built-in local server address is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Server base URL
    /// Optional. Overrides the server configured in the profile.
    #[clap(short = 's', long, help = "analysis server base URL")]
    server: Option<String>,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    server: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            server: args.server,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_only() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "lab"]);
        assert_eq!(args.profile(), "lab");
        assert_eq!(args.server(), None);
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_server_override() {
        let args = CommandLineArgs::parse_from(["program", "--server", "http://lab:8080"]);
        assert_eq!(args.server(), Some("http://lab:8080"));
        assert_eq!(args.profile(), "default");
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-p", "dev", "-s", "http://x", "-v"]);
        assert_eq!(args.profile(), "dev");
        assert_eq!(args.server(), Some("http://x"));
        assert!(args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert_eq!(args.server(), None);
        assert!(!args.verbose());
    }
}
