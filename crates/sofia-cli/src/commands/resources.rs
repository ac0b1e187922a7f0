use sofia_config::SofiaConfig;
use sofia_resources::ResourceRegistry;

use crate::cli::root_commands::JsonArgs;
use crate::output;

pub fn handle(args: &JsonArgs, config: &SofiaConfig) -> anyhow::Result<()> {
    let registry = ResourceRegistry::new(config.resources.links.iter().cloned());
    let links: Vec<_> = registry.iter().cloned().collect();

    if args.json {
        return output::print_json(&links);
    }
    println!("📚 Recursos disponíveis:");
    print!("{}", output::render_links(&links));
    Ok(())
}
