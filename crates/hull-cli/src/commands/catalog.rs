use hull_core::EngineConfig;
use hull_engine::Engine;

pub fn run(name: Option<&str>, config: EngineConfig) -> anyhow::Result<()> {
    let engine = Engine::new(config);

    match name {
        Some(name) => print_command_detail(&engine, name)?,
        None => print_command_list(&engine),
    }

    Ok(())
}

fn print_command_list(engine: &Engine) {
    let declarations = engine.catalog().declarations();

    println!("Available commands ({}):", declarations.len());
    for decl in declarations {
        println!("{} - {}", decl.name, decl.description);
    }
}

fn print_command_detail(engine: &Engine, name: &str) -> anyhow::Result<()> {
    let decl = engine
        .catalog()
        .declaration(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown command: {name}"))?;
    let parameters = serde_json::to_string_pretty(&decl.parameters.to_value())?;

    println!("name: {}", decl.name);
    println!("description: {}", decl.description);
    println!("parameters:");
    println!("{parameters}");

    Ok(())
}
