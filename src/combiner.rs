use crate::compat::{String, Vec};

fn is_single_dot(segment: &str) -> bool {
    segment == "."
}

fn is_double_dot(segment: &str) -> bool {
    segment == ".."
}

/// Accumulates a `/`-separated path, remembering where each appended
/// segment starts so `..` can drop it as a unit.
#[derive(Debug, Clone)]
pub struct PathCombiner {
    path: String,
    segments: Vec<usize>,
    root_len: usize,
}

impl PathCombiner {
    /// Start from the directory of `base`: everything up to and including
    /// its last `/`, or the root when it has none.
    pub fn new(base: &str) -> Self {
        let mut combiner = Self {
            path: String::new(),
            segments: Vec::new(),
            root_len: 0,
        };
        match memchr::memrchr(b'/', base.as_bytes()) {
            Some(last) => combiner.initialize(&base[..=last]),
            None => combiner.set_as_root(),
        }
        combiner
    }

    fn initialize(&mut self, directory: &str) {
        self.path.clear();
        self.segments.clear();
        self.root_len = usize::from(directory.starts_with('/'));
        self.path.push_str(&directory[..self.root_len]);

        let mut rest = &directory[self.root_len..];
        while let Some(slash) = memchr::memchr(b'/', rest.as_bytes()) {
            self.segments.push(self.path.len());
            self.path.push_str(&rest[..=slash]);
            rest = &rest[slash + 1..];
        }
    }

    fn set_as_root(&mut self) {
        self.path.clear();
        self.path.push('/');
        self.segments.clear();
        self.root_len = 1;
    }

    fn pop(&mut self) {
        match self.segments.pop() {
            Some(start) => self.path.truncate(start),
            None => self.set_as_root(),
        }
    }

    fn push(&mut self, segment: &str, slash: bool) {
        self.segments.push(self.path.len());
        self.path.push_str(segment);
        if slash {
            self.path.push('/');
        }
    }

    /// Apply `relative` and return the combined path.
    ///
    /// Dot segments are only interpreted before the first `?` or `#`;
    /// whatever follows is appended as is.
    pub fn combine(mut self, relative: &str) -> String {
        let split = memchr::memchr2(b'?', b'#', relative.as_bytes()).unwrap_or(relative.len());
        let (mut input, suffix) = relative.split_at(split);

        if let Some(stripped) = input.strip_prefix('/') {
            self.set_as_root();
            input = stripped;
        }

        loop {
            let location = memchr::memchr(b'/', input.as_bytes());
            let segment = match location {
                Some(loc) => {
                    let segment = &input[..loc];
                    input = &input[loc + 1..];
                    segment
                }
                None => input,
            };

            if is_double_dot(segment) {
                self.pop();
            } else if !is_single_dot(segment) && !(location.is_none() && segment.is_empty()) {
                self.push(segment, location.is_some());
            }

            if location.is_none() {
                break;
            }
        }

        self.path.push_str(suffix);
        self.path
    }
}
