use hull_core::DependencyGraph;
use std::path::Path;

pub fn run(root: &str, graph_path: &Path) -> anyhow::Result<()> {
    if graph_path.exists() {
        anyhow::bail!("graph file {} already exists", graph_path.display());
    }

    let graph = DependencyGraph::with_root(root);
    super::save_graph(graph_path, &graph)?;
    println!(
        "Created graph with root module `{root}` at {}",
        graph_path.display()
    );
    Ok(())
}
