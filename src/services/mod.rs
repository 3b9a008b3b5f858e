pub mod extraction;
pub mod image_decoder;
pub mod palette_generator;
pub mod palette_library;

pub use extraction::{ExtractedPalette, ExtractionError, ExtractionService};
pub use image_decoder::{DecodeError, DecodedImage, ImageDecoder};
pub use palette_generator::{
    generate_from_prompt, generator_from_config, normalize_prompt, GeneratedPalette,
    GeneratorError, LibraryGenerator, PaletteGenerator, RemoteGenerator,
};
pub use palette_library::{LibraryError, LibraryPalette, PaletteLibrary};
