//! Rendered Markdown with out-of-band block boundaries.
//!
//! The renderer never encodes paragraph boundaries into the text itself.
//! Block elements wrap their output in [`Segment::Break`] markers which are
//! collapsed into blank lines once, after the whole tree has been rendered.

/// One piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal Markdown text.
    Text(String),

    /// An inline code span, backticks included.
    InlineCode(String),

    /// A fenced code block, fences included.
    CodeBlock(String),

    /// Boundary of a block-level element.
    Break,
}

impl Segment {
    /// The rendered text, or `None` for a break.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::InlineCode(text) | Self::CodeBlock(text) => {
                Some(text.as_str())
            }
            Self::Break => None,
        }
    }
}

/// An ordered sequence of text, code and block breaks.
///
/// Adjacent text is merged and empty text or code is never stored, so a
/// fragment is empty exactly when it holds no segments. Code segments are
/// kept apart from text so text-level fixups can leave them alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    segments: Vec<Segment>,
}

impl Fragment {
    /// Empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment holding a single piece of text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_text(&text.into());
        fragment
    }

    /// Fragment holding a single segment.
    #[must_use]
    pub fn segment(segment: Segment) -> Self {
        let mut fragment = Self::new();
        fragment.push(segment);
        fragment
    }

    /// The segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether nothing, not even a break, has been rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append text, merging with trailing text.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }

    /// Append a block break.
    pub fn push_break(&mut self) {
        self.segments.push(Segment::Break);
    }

    /// Append any segment. Text merges; empty code is skipped.
    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Text(text) => self.push_text(&text),
            Segment::Break => self.push_break(),
            Segment::InlineCode(code) | Segment::CodeBlock(code) if code.is_empty() => {}
            code => self.segments.push(code),
        }
    }

    /// Append every segment of `other`.
    pub fn append(&mut self, other: Fragment) {
        for segment in other.segments {
            self.push(segment);
        }
    }

    /// Surround a non-empty fragment with block breaks.
    #[must_use]
    pub fn into_block(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let mut block = Self::new();
        block.push_break();
        block.append(self);
        block.push_break();
        block
    }

    /// Trim leading whitespace of the first segment and trailing whitespace of
    /// the last one, when those are text.
    ///
    /// Breaks and code shield the text behind them: only the outer edges are
    /// touched.
    #[must_use]
    pub fn trim(mut self) -> Self {
        if let Some(Segment::Text(first)) = self.segments.first_mut() {
            let trimmed = first.trim_start();
            if trimmed.len() != first.len() {
                *first = trimmed.to_string();
            }
        }
        if matches!(self.segments.first(), Some(Segment::Text(t)) if t.is_empty()) {
            self.segments.remove(0);
        }

        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.truncate(last.trim_end().len());
        }
        if matches!(self.segments.last(), Some(Segment::Text(t)) if t.is_empty()) {
            self.segments.pop();
        }

        self
    }

    /// Concatenated text and code with every break dropped.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.segments.iter().filter_map(Segment::as_str).collect()
    }

    /// The pieces between breaks, including empty pieces for adjacent breaks
    /// and for breaks at either edge.
    #[must_use]
    pub fn blocks(&self) -> Vec<Fragment> {
        let mut blocks = vec![Fragment::new()];
        for segment in &self.segments {
            match segment {
                Segment::Break => blocks.push(Fragment::new()),
                other => {
                    if let Some(current) = blocks.last_mut() {
                        current.push(other.clone());
                    }
                }
            }
        }
        blocks
    }

    /// Drop every break, joining the blocks on either side with one space.
    ///
    /// Whitespace-only blocks are dropped, and no space is added where one
    /// side already has whitespace at the seam.
    #[must_use]
    pub fn flatten(self) -> Self {
        let mut flat = Self::new();
        for block in self.blocks() {
            if block.to_text().trim().is_empty() {
                continue;
            }
            let ends_with_space = flat.to_text().ends_with(char::is_whitespace);
            let starts_with_space = block.to_text().starts_with(char::is_whitespace);
            if !flat.is_empty() && !ends_with_space && !starts_with_space {
                flat.push_text(" ");
            }
            flat.append(block);
        }
        flat
    }

    /// Whether the fragment holds a fenced code block and nothing but
    /// whitespace besides.
    #[must_use]
    pub fn is_code_block(&self) -> bool {
        let mut found = false;
        for segment in &self.segments {
            match segment {
                Segment::CodeBlock(_) => found = true,
                Segment::Text(text) if text.trim().is_empty() => {}
                _ => return false,
            }
        }
        found
    }

    /// Whether any text or code segment spans more than one line.
    #[must_use]
    pub fn has_newline(&self) -> bool {
        self.segments
            .iter()
            .filter_map(Segment::as_str)
            .any(|text| text.contains('\n'))
    }
}
