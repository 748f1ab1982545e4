use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{Error, Road, Town},
    graph::Graph,
};

/// Index into a small pool of town names, so that generated operations hit
/// existing towns often.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TownIndex(pub u8);

impl TownIndex {
    pub const POOL: u8 = 12;

    pub fn name(&self) -> String {
        format!("T{}", self.0 % Self::POOL)
    }

    pub fn town(&self) -> Town {
        // The name is never empty.
        Town::new(self.name()).unwrap_or_else(|_| unreachable!())
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp {
    AddVertex(TownIndex),
    RemoveVertex(TownIndex),
    AddEdge(TownIndex, TownIndex, i8, bool),
    RemoveEdge(TownIndex, TownIndex, i8, bool),
    ShortestPath(TownIndex, TownIndex),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult {
    AddVertex(bool),
    RemoveVertex(bool),
    AddEdge(Result<Option<String>, Error>),
    RemoveEdge(Option<String>),
    ShortestPath(Vec<String>),
}

fn road_name(named: bool) -> &'static str {
    if named {
        "Road"
    } else {
        ""
    }
}

impl MutOp {
    pub fn apply(&self, graph: &mut Graph) -> MutOpResult {
        match *self {
            MutOp::AddVertex(t) => MutOpResult::AddVertex(graph.add_vertex(t.town())),
            MutOp::RemoveVertex(t) => MutOpResult::RemoveVertex(graph.remove_vertex(&t.town())),
            MutOp::AddEdge(a, b, distance, named) => MutOpResult::AddEdge(
                graph
                    .add_edge(&a.town(), &b.town(), distance.into(), road_name(named))
                    .map(|road| road.as_ref().map(Road::to_string)),
            ),
            MutOp::RemoveEdge(a, b, distance, named) => MutOpResult::RemoveEdge(
                graph
                    .remove_edge(&a.town(), &b.town(), distance.into(), road_name(named))
                    .as_ref()
                    .map(Road::to_string),
            ),
            MutOp::ShortestPath(a, b) => {
                MutOpResult::ShortestPath(graph.shortest_path(&a.town(), &b.town()))
            }
        }
    }
}

/// A sequence of graph operations, bounded in length.
#[derive(Debug, Clone)]
pub struct MutOpsSeq(Vec<MutOp>);

impl MutOpsSeq {
    pub const MAX_LEN: usize = 256;
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut ops = Vec::new();

        for op in u.arbitrary_iter::<MutOp>()? {
            ops.push(op?);

            if ops.len() >= Self::MAX_LEN {
                break;
            }
        }

        Ok(Self(ops))
    }
}

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
