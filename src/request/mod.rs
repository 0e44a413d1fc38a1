mod draft_data;

// re-export
pub use draft_data::DraftData;
