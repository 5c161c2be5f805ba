//! Edge-list provider: reads `source,destination,weight` text files into a
//! [`boruvka_core::Graph`] and generates random graphs in the same format.

mod errors;
mod generator;
mod provider;
mod record;

pub use errors::{EdgeListError, GeneratorError};
pub use generator::{GraphGenerator, vertex_label};
pub use provider::{EdgeListProvider, load_graph};
pub use record::{EdgeRecord, write_edge_list};
