use crate::code::CodeTable;
use crate::header::make_header;
use crate::tree::HuffmanTree;
use crate::count_frequencies;

/// Encodes `source` into the textual payload: the frequency header, a
/// newline, then one '0'/'1' character per code bit in source order.
///
/// Empty input produces an empty payload. Input with a single distinct
/// symbol produces the header alone, since a lone leaf has no code and
/// the header already carries the repeat count.
pub fn encode(source: &[u8]) -> String {
    let freqs = count_frequencies(source);
    let tree = match HuffmanTree::create(&freqs) {
        Some(tree) => tree,
        None => return String::new(),
    };

    let header = make_header(&freqs);
    if tree.is_leaf() {
        return header;
    }

    let codes = CodeTable::from_tree(&tree);
    let mut payload = String::with_capacity(header.len() + 1 + source.len());
    payload.push_str(&header);
    payload.push('\n');
    for &byte in source {
        payload.push_str(codes.code(byte));
    }
    payload
}
