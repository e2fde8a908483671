use derive_builder::Builder;

/// Runtime knobs for a decode call.
///
/// This crate does no I/O and reads no files or environment variables; these options are the
/// entirety of its configuration surface: a recursion bound, and the lenient-vs-strict UTF-8
/// choice.
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned")]
pub struct DecodeOptions {
    /// Maximum schema nesting depth before decoding fails with `InvalidSchema` instead of
    /// recursing further. Guards against pathological schemas exhausting the stack.
    #[builder(default = "32")]
    pub max_depth: usize,

    /// When `true`, a `Utf8String` whose bytes aren't valid UTF-8 fails with `InvalidUtf8`.
    /// When `false` (the default), malformed sequences are replaced.
    #[builder(default = "false")]
    pub strict_utf8: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { max_depth: 32, strict_utf8: false }
    }
}
