//! Read-only operations over a loaded `Table`.
//! Both modules add inherent methods to `Table`.

pub mod cell_accessor;
pub mod json_export;
