//! Office Open XML (OOXML) output.
//!
//! Only the pieces needed to emit a PowerPoint package live here:
//!
//! 1. **OPC Layer** (`opc`): relationships and the well-known content,
//!    namespace and relationship type URIs
//! 2. **Errors** (`error`): failures while generating XML or the archive
//! 3. **`pptx`**: templates, shapes, slides and the package writer
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export error types
pub use error::{OoxmlError, Result};
