use std::fmt;

/// Which of the three input affordances is selected for entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    Text,
    File,
    Url,
}

impl InputMode {
    pub const ALL: [InputMode; 3] = [InputMode::Text, InputMode::File, InputMode::Url];

    /// Tab caption shown in the input panel.
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::File => "File Upload",
            InputMode::Url => "URL",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputMode::Text => "text",
            InputMode::File => "file",
            InputMode::Url => "url",
        };
        f.write_str(name)
    }
}

/// A file the user picked, held in memory as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Contents can be large; keep Debug output to the metadata.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Per-mode captured values. Each mode keeps its own value; switching modes
/// never touches the others.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSelection {
    mode: InputMode,
    text: String,
    file: Option<SelectedFile>,
    url: String,
}

impl InputSelection {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns true when the mode actually changed.
    pub(crate) fn set_mode(&mut self, mode: InputMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    pub(crate) fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    pub(crate) fn set_url(&mut self, url: String) -> bool {
        if self.url == url {
            return false;
        }
        self.url = url;
        true
    }

    pub(crate) fn set_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }
}
