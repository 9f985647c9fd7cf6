mod png_codec;

pub use png_codec::PngImageCodec;
