//! Demo server entry point: bind its configuration to flags and environment
//! variables, parse the command line and print the effective settings.

use std::io::{self, Write};

use clap::Command;
use flag_tags::{Bindings, FlagError, FlagTags, Options, is_display_request};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, FlagTags)]
struct Config {
    #[flag(value = "3001")]
    pub port: i64,
    #[flag(usage = "Disable authentication")]
    pub disable_auth: bool,
    #[flag(usage = "JWT signing key")]
    pub jwt_sign_key: String,
    #[flag(name = "pghost", env = "PGHOST", usage = "Postgres hostname")]
    pub database_host: String,
    #[flag(name = "pgpassword", env = "PGPASSWORD", usage = "Postgres password")]
    pub database_password: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::default();
    parse_command_line(&mut config)?;
    write_config(&mut io::stdout().lock(), &config)?;
    Ok(())
}

fn parse_command_line(config: &mut Config) -> Result<(), FlagError> {
    let mut bindings = Bindings::resolve(config, &Options::default())?;
    debug!(count = bindings.len(), "resolved flag bindings");
    let command = Command::new("server").about("run the server");
    match bindings.parse_from(command, std::env::args_os()) {
        Ok(_) => Ok(()),
        Err(FlagError::CliParsing(err)) if is_display_request(&err) => err.exit(),
        Err(err) => Err(err),
    }
}

fn write_config(out: &mut impl Write, config: &Config) -> io::Result<()> {
    let password = if config.database_password.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    };
    writeln!(out, "port:          {}", config.port)?;
    writeln!(out, "disable_auth:  {}", config.disable_auth)?;
    writeln!(out, "jwt_sign_key:  {:?}", config.jwt_sign_key)?;
    writeln!(out, "pghost:        {:?}", config.database_host)?;
    writeln!(out, "pgpassword:    {password}")
}
