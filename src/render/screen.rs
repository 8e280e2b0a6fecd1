//! Screen renderer: the segmented document as one scrollable node tree.
//!
//! No pagination, no headers or footers; roles, bold, and indentation come
//! straight from the classifier. Inline annotation extraction runs on every
//! body and full-width line.

use serde::{Deserialize, Serialize};

use crate::annotate::AnnotationExtractor;
use crate::model::{Inline, LineRole, SegmentedDocument, SignatureBlock};

use super::RenderOptions;

/// One node of the interactive render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ScreenNode {
    /// The title block: every line centered and bold.
    Title {
        /// Title lines in order.
        lines: Vec<String>,
    },

    /// A numbered section header, always bold.
    Heading {
        /// Flattened layout-line index.
        line: usize,
        /// Numeric prefix (e.g., "4.").
        number: String,
        /// Header title with annotations extracted.
        content: Vec<Inline>,
    },

    /// A body or full-width text line.
    Text {
        /// Flattened layout-line index.
        line: usize,
        /// Classified role.
        role: LineRole,
        /// Classified emphasis.
        bold: bool,
        /// Classified indentation level.
        indent: u8,
        /// Line content with annotations extracted.
        content: Vec<Inline>,
    },

    /// A full-width line rendered as an external hyperlink.
    Link {
        /// Flattened layout-line index.
        line: usize,
        /// Classified emphasis.
        bold: bool,
        /// The URL, as written in the source.
        url: String,
    },

    /// Vertical gap reproducing a blank source line.
    Gap,

    /// The trailing signature block.
    Signature(SignatureBlock),
}

/// The interactive render tree for a segmented document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenDocument {
    /// Nodes in display order.
    pub nodes: Vec<ScreenNode>,
}

impl ScreenDocument {
    /// The (role, bold, indent) triple per logical line, in traversal order.
    /// Must agree exactly with the pagination renderer's traversal.
    pub fn style_triples(&self) -> Vec<(LineRole, bool, u8)> {
        let mut triples = Vec::new();
        for node in &self.nodes {
            match node {
                ScreenNode::Title { lines } => {
                    triples.extend(lines.iter().map(|_| (LineRole::Title, true, 0)));
                }
                ScreenNode::Heading { .. } => triples.push((LineRole::SectionHeader, true, 0)),
                ScreenNode::Text {
                    role, bold, indent, ..
                } => triples.push((*role, *bold, *indent)),
                ScreenNode::Link { bold, .. } => triples.push((LineRole::FullWidth, *bold, 0)),
                ScreenNode::Gap => triples.push((LineRole::Blank, false, 0)),
                ScreenNode::Signature(_) => {}
            }
        }
        triples
    }

    /// All review markers in the tree, in display order.
    pub fn markers(&self) -> Vec<&crate::model::ReviewMarker> {
        let mut found = Vec::new();
        for node in &self.nodes {
            let content = match node {
                ScreenNode::Heading { content, .. } | ScreenNode::Text { content, .. } => content,
                _ => continue,
            };
            for segment in content {
                if let Inline::Marker { marker, .. } = segment {
                    found.push(marker);
                }
            }
        }
        found
    }
}

/// Render a segmented document to the interactive node tree.
pub fn to_screen(doc: &SegmentedDocument, options: &RenderOptions) -> ScreenDocument {
    let extractor = AnnotationExtractor::new();
    let video_url = options.video_url.as_deref();
    let mut nodes = Vec::new();

    if !doc.title_lines.is_empty() {
        nodes.push(ScreenNode::Title {
            lines: doc.title_lines.clone(),
        });
    }

    for line in doc.layout_lines() {
        match line.role {
            // Grouped into the Title node above.
            LineRole::Title => {}
            LineRole::Blank => nodes.push(ScreenNode::Gap),
            LineRole::SectionHeader => nodes.push(ScreenNode::Heading {
                line: line.index,
                number: line.section_number.unwrap_or_default().to_string(),
                content: extractor.extract(line.text, video_url),
            }),
            LineRole::FullWidth if line.text.starts_with("http") => {
                nodes.push(ScreenNode::Link {
                    line: line.index,
                    bold: line.bold,
                    url: line.text.to_string(),
                });
            }
            LineRole::SectionBody | LineRole::FullWidth => nodes.push(ScreenNode::Text {
                line: line.index,
                role: line.role,
                bold: line.bold,
                indent: line.indent,
                content: extractor.extract(line.text, video_url),
            }),
        }
    }

    if !doc.signature.is_empty() {
        nodes.push(ScreenNode::Signature(doc.signature.clone()));
    }

    ScreenDocument { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    const SAMPLE: &str = "TOWNSHIP OF EDISON\n\
        A Regular Meeting of the Council was held.\n\
        1. CALL TO ORDER\n\
        The meeting was called to order.\n\
        \n\
        https://township.example/stream\n";

    #[test]
    fn test_tree_shape() {
        let doc = segment(SAMPLE);
        let screen = to_screen(&doc, &RenderOptions::new());

        assert!(matches!(&screen.nodes[0], ScreenNode::Title { lines } if lines.len() == 1));
        assert!(matches!(&screen.nodes[1], ScreenNode::Text { .. }));
        assert!(
            matches!(&screen.nodes[2], ScreenNode::Heading { number, .. } if number == "1.")
        );
        assert!(matches!(&screen.nodes[3], ScreenNode::Text { indent: 1, .. }));
        assert!(matches!(&screen.nodes[4], ScreenNode::Gap));
        assert!(
            matches!(&screen.nodes[5], ScreenNode::Link { url, .. } if url.starts_with("https"))
        );
    }

    #[test]
    fn test_triples_match_segmentation() {
        let doc = segment(SAMPLE);
        let screen = to_screen(&doc, &RenderOptions::new());
        assert_eq!(screen.style_triples(), doc.style_triples());
    }

    #[test]
    fn test_markers_resolved_against_video_url() {
        let doc = segment(
            "A Regular Meeting was held.\n\
             4. DISCUSSION ITEMS\n\
             Councilmember Smith raised [REVIEW: budget concern @12:05]\n",
        );
        let options = RenderOptions::new().with_video_url("https://vid.example/m1");
        let screen = to_screen(&doc, &options);

        let markers = screen.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].timestamp_seconds, Some(725));

        let hrefs: Vec<_> = screen
            .nodes
            .iter()
            .filter_map(|n| match n {
                ScreenNode::Text { content, .. } => Some(content),
                _ => None,
            })
            .flatten()
            .filter_map(|segment| match segment {
                Inline::Marker { href, .. } => href.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(hrefs, vec!["https://vid.example/m1?t=725"]);
    }

    #[test]
    fn test_signature_node_present() {
        let doc = segment(
            "A Regular Meeting was held.\n____    ____\nJane Doe    John Roe\n",
        );
        let screen = to_screen(&doc, &RenderOptions::new());
        assert!(matches!(
            screen.nodes.last(),
            Some(ScreenNode::Signature(block)) if block.names() == ["Jane Doe", "John Roe"]
        ));
    }
}
