//! Converter core: pure TMX model, output naming and run statistics.
mod naming;
mod report;
mod stats;
mod tmx;
mod xml;

pub use naming::{
    encodes_counts, individual_output_path, merged_output_path, OUTPUT_EXTENSION,
};
pub use report::{render_individual_summary, render_merge_summary};
pub use stats::{FileRecord, RunStatistics};
pub use tmx::{TmxDocument, TmxFragment, TmxHeader, TranslationUnit, TMX_VERSION};
pub use xml::{XmlElement, XmlNode};
