pub mod descriptor;
pub mod error;
pub mod outputs;

pub use descriptor::{LAKEFILE, PackageDescriptor, parse_descriptor, render_json};
pub use error::AppError;
pub use outputs::{DescriptorOutputs, docs_facet, docs_facets};
