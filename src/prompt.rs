//! Few-shot prompt assembly for the extraction engine.
//!
//! The prompt is a fixed preamble, every example rendered as a paired
//! `text`/`json` fenced block, and finally the input to parse. The
//! model is instructed to answer with nothing but a JSON array matching
//! the demonstrated shape.

/// Instructions preceding the example blocks.
pub const ARRAY_PARSER_PREAMBLE: &str = "You are a natural language processing algorithm. \
You accept a piece of raw text and parse it into a well-formed JSON array consistent with \
the shape given in the examples (your output must always be an array).\n\
Your output shape must exactly match the shape specified in the examples.";

/// Render one example as a paired input/output fenced block.
///
/// `parsed_json` is the example's expected array, already serialized.
pub fn example_block(index: usize, input: &str, parsed_json: &str) -> String {
    format!(
        "Example Input {}\n```text\n{}\n```\n\n```json\n{}\n```",
        index, input, parsed_json
    )
}

/// Assemble the full extraction prompt from pre-rendered example blocks.
pub fn extraction_prompt(raw_text: &str, example_blocks: &[String]) -> String {
    format!(
        "{}\n\n{}\n\nInput\n```text\n{}\n```",
        ARRAY_PARSER_PREAMBLE,
        example_blocks.join("\n\n"),
        raw_text
    )
}
