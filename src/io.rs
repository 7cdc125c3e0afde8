//! Graph input documents and JSON/RON (de)serialization helpers.
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::graph::{Graph, GraphError, Weight};

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// `{"graphs": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub graphs: Vec<GraphSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub id: u32,
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl GraphSpec {
    /// Builds the graph, inserting edges in document order.
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new(self.nodes.iter().cloned())?;
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let mut content = to_json_string(value)?;
    content.push('\n');
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    from_json_str(&read_to_string(path)?)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

pub fn from_ron_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(s)?)
}

pub fn write_ron<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_ron_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_ron<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    from_ron_str(&read_to_string(path)?)
}

fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "graphs": [
            {
                "id": 1,
                "nodes": ["A", "B", "C"],
                "edges": [
                    {"from": "A", "to": "B", "weight": 1},
                    {"from": "B", "to": "C", "weight": 2.5}
                ]
            },
            {"id": 2, "nodes": ["X"]}
        ]
    }"#;

    #[test]
    fn parses_graph_documents() {
        let doc: GraphDocument = from_json_str(INPUT).unwrap();
        assert_eq!(doc.graphs.len(), 2);
        assert_eq!(doc.graphs[0].edges[1].weight, 2.5);
        assert!(doc.graphs[1].edges.is_empty());

        let graph = doc.graphs[0].to_graph().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn unknown_edge_label_fails_the_graph() {
        let spec = GraphSpec {
            id: 7,
            nodes: vec!["A".into()],
            edges: vec![EdgeSpec {
                from: "A".into(),
                to: "B".into(),
                weight: 1.0,
            }],
        };
        assert_eq!(
            spec.to_graph().unwrap_err(),
            GraphError::UnknownLabel("B".into())
        );
    }

    #[test]
    fn json_and_ron_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let doc: GraphDocument = from_json_str(INPUT).unwrap();

        let json_path = dir.path().join("graphs.json");
        write_json(&json_path, &doc).unwrap();
        assert_eq!(read_json::<_, GraphDocument>(&json_path).unwrap(), doc);

        let ron_path = dir.path().join("graphs.ron");
        write_ron(&ron_path, &doc).unwrap();
        assert_eq!(read_ron::<_, GraphDocument>(&ron_path).unwrap(), doc);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_json::<_, GraphDocument>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
