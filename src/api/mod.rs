pub mod colors;
pub mod export;
pub mod extract;
pub mod generate;
pub mod json;
pub mod report;
pub mod types;

pub use colors::{__path_handle_color, handle_color};
pub use export::{__path_handle_export, __path_handle_share, handle_export, handle_share};
pub use extract::{__path_handle_extract, handle_extract, ExtractResponse, ExtractedColorDoc};
pub use generate::{
    __path_handle_generate, __path_handle_random_palette, handle_generate, handle_random_palette,
    GenerateRequest,
};
pub use json::ApiJson;
pub use report::{handle_report, ReportRequest, ReportResponse, __path_handle_report};
pub use types::{
    ColorDetails, ContrastCheckView, ErrorBody, HslView, PaletteEntryDoc, PaletteRequest,
    PaletteResponse, RgbView,
};
