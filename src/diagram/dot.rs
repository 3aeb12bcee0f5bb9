use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub label: String,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cluster {
    pub id: String,
    pub label: String,
    pub nodes: Vec<Node>,
    pub children: Vec<Cluster>,
}

impl Cluster {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn node(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.nodes.push(Node::new(id, label));
        self
    }

    pub fn child(mut self, cluster: Cluster) -> Self {
        self.children.push(cluster);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            style: None,
            color: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A directed graph rendered to Graphviz DOT. Only the subset the
/// architecture diagram needs: nested clusters, labeled nodes, styled edges.
#[derive(Debug, Clone)]
pub struct Graph {
    pub id: String,
    pub title: String,
    pub nodes: Vec<Node>,
    pub clusters: Vec<Cluster>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nodes: Vec::new(),
            clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.nodes.push(Node::new(id, label));
        self
    }

    pub fn cluster(mut self, cluster: Cluster) -> Self {
        self.clusters.push(cluster);
        self
    }

    pub fn edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph {} {{", self.id);
        let _ = writeln!(out, "    label=\"{}\";", escape(&self.title));
        let _ = writeln!(out, "    rankdir=TB;");
        let _ = writeln!(out, "    fontsize=14;");
        let _ = writeln!(out, "    bgcolor=\"white\";");
        let _ = writeln!(
            out,
            "    node [shape=box, style=\"rounded,filled\", fillcolor=\"#F5F5F5\"];"
        );

        for node in &self.nodes {
            let _ = writeln!(out, "    {} [label=\"{}\"];", node.id, escape(&node.label));
        }
        for cluster in &self.clusters {
            render_cluster(&mut out, cluster, 1);
        }
        for edge in &self.edges {
            let _ = writeln!(out, "    {}", render_edge(edge));
        }

        out.push_str("}\n");
        out
    }
}

fn render_cluster(out: &mut String, cluster: &Cluster, depth: usize) {
    let indent = "    ".repeat(depth);
    let _ = writeln!(out, "{indent}subgraph cluster_{} {{", cluster.id);
    let _ = writeln!(out, "{indent}    label=\"{}\";", escape(&cluster.label));
    for node in &cluster.nodes {
        let _ = writeln!(
            out,
            "{indent}    {} [label=\"{}\"];",
            node.id,
            escape(&node.label)
        );
    }
    for child in &cluster.children {
        render_cluster(out, child, depth + 1);
    }
    let _ = writeln!(out, "{indent}}}");
}

fn render_edge(edge: &Edge) -> String {
    let mut attrs = Vec::new();
    if let Some(label) = &edge.label {
        attrs.push(format!("label=\"{}\"", escape(label)));
    }
    if let Some(style) = &edge.style {
        attrs.push(format!("style={style}"));
    }
    if let Some(color) = &edge.color {
        attrs.push(format!("color={color}"));
    }

    if attrs.is_empty() {
        format!("{} -> {};", edge.from, edge.to)
    } else {
        format!("{} -> {} [{}];", edge.from, edge.to, attrs.join(", "))
    }
}

fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nodes_and_edges() {
        let graph = Graph::new("g", "Test")
            .node("a", "Node A")
            .node("b", "Node B")
            .edge(Edge::new("a", "b").label("flow").style("dashed"));
        let dot = graph.render();

        assert!(dot.starts_with("digraph g {"));
        assert!(dot.contains("a [label=\"Node A\"];"));
        assert!(dot.contains("a -> b [label=\"flow\", style=dashed];"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn renders_nested_clusters() {
        let graph = Graph::new("g", "Test").cluster(
            Cluster::new("outer", "Outer").child(Cluster::new("inner", "Inner").node("x", "X")),
        );
        let dot = graph.render();

        assert!(dot.contains("subgraph cluster_outer {"));
        assert!(dot.contains("subgraph cluster_inner {"));
        assert!(dot.contains("x [label=\"X\"];"));
    }

    #[test]
    fn escapes_quotes_in_labels() {
        let graph = Graph::new("g", "Test").node("a", "say \"hi\"");
        assert!(graph.render().contains("label=\"say \\\"hi\\\"\""));
    }
}
