/// How a scheme's remainder is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    /// `http` and `https`: full authority required
    HttpFamily,
    /// `file`: bare host, no user info or port
    File,
    /// Anything else: path, query and fragment only
    #[default]
    Opaque,
}

impl SchemeType {
    /// Check if `//` and an authority-like section follow the scheme
    pub fn has_authority(self) -> bool {
        self != Self::Opaque
    }
}
