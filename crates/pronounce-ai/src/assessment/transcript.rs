/// Accumulates recognizer output while a recording is in progress.
///
/// Final segments are appended in arrival order and never revised. The interim
/// segment is the recognizer's current guess for speech after the last final
/// segment and is replaced wholesale on each update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptBuffer {
    finals: Vec<String>,
    interim: Option<String>,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a final segment. The pending interim guess is cleared because
    /// recognizers finalize the speech it described.
    pub fn push_final(&mut self, segment: &str) {
        let segment = segment.trim();
        if !segment.is_empty() {
            self.finals.push(segment.to_string());
        }
        self.interim = None;
    }

    pub fn set_interim(&mut self, segment: &str) {
        let segment = segment.trim();
        self.interim = if segment.is_empty() {
            None
        } else {
            Some(segment.to_string())
        };
    }

    pub fn clear_interim(&mut self) {
        self.interim = None;
    }

    pub fn final_text(&self) -> String {
        self.finals.join(" ")
    }

    pub fn interim_text(&self) -> Option<&str> {
        self.interim.as_deref()
    }

    /// Everything heard so far, including the interim guess.
    pub fn spoken_text(&self) -> String {
        self.finals
            .iter()
            .map(String::as_str)
            .chain(self.interim.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.finals.is_empty() && self.interim.is_none()
    }

    /// Close the recording and return the text to score.
    pub fn finish(self) -> String {
        self.spoken_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_final_segments_in_order() {
        let mut buffer = TranscriptBuffer::new();
        buffer.push_final("I love ");
        buffer.push_final(" programming");
        assert_eq!(buffer.final_text(), "I love programming");
        assert_eq!(buffer.spoken_text(), "I love programming");
    }

    #[test]
    fn interim_guess_is_replaced_and_included_until_finalized() {
        let mut buffer = TranscriptBuffer::new();
        buffer.push_final("the cat");
        buffer.set_interim("is slee");
        buffer.set_interim("is sleeping");
        assert_eq!(buffer.interim_text(), Some("is sleeping"));
        assert_eq!(buffer.spoken_text(), "the cat is sleeping");
        assert_eq!(buffer.final_text(), "the cat");

        buffer.push_final("is sleeping");
        assert_eq!(buffer.interim_text(), None);
        assert_eq!(buffer.finish(), "the cat is sleeping");
    }

    #[test]
    fn blank_segments_are_ignored() {
        let mut buffer = TranscriptBuffer::new();
        buffer.push_final("   ");
        buffer.set_interim("");
        assert!(buffer.is_empty());
        assert_eq!(buffer.finish(), "");
    }

    #[test]
    fn clear_interim_drops_the_guess() {
        let mut buffer = TranscriptBuffer::new();
        buffer.set_interim("hello");
        buffer.clear_interim();
        assert!(buffer.is_empty());
    }
}
