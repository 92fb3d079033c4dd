/// Lazy iterator over a path and its ancestors
///
/// For path `/a/b/c`, yields: `/a/b/c` → `/a/b` → `/a` → `/`
///
/// Borrows from the input; never allocates.
///
/// # Examples
///
/// ```
/// use paperpath_router::path::PathHierarchy;
///
/// let paths: Vec<&str> = PathHierarchy::new("/mdcat/past-papers").collect();
/// assert_eq!(paths, vec!["/mdcat/past-papers", "/mdcat", "/"]);
/// ```
#[derive(Debug, Clone)]
pub struct PathHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> PathHierarchy<'a> {
    /// Starts at `path`, which should be in canonical form
    pub fn new(path: &'a str) -> Self {
        Self {
            current: Some(path),
        }
    }
}

impl<'a> Iterator for PathHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = if current == "/" {
            None
        } else {
            match current.rfind('/') {
                Some(0) => Some("/"),
                Some(slash_pos) => Some(&current[..slash_pos]),
                None => None,
            }
        };

        Some(current)
    }
}
