use sofia_config::SofiaConfig;

use crate::cli::root_commands::JsonArgs;
use crate::output;

pub fn handle(args: &JsonArgs, config: &SofiaConfig) -> anyhow::Result<()> {
    let shown = config.redacted();
    if args.json {
        return output::print_json(&shown);
    }
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}
