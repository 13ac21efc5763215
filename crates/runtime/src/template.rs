//! Path templates
//!
//! A template such as `/v1/users/{user_id}:activate` is a sequence of literal
//! text and `{name}` placeholders. A placeholder captures one path segment and
//! stops early when the next literal starts inside that segment.
//!
//! `{name=projects/*}` spells out the segments a placeholder captures: literal
//! segments must appear verbatim, `*` matches one segment and a trailing `**`
//! matches the remainder of the path.

use thiserror::Error;

/// Errors in a path template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("unterminated placeholder in '{0}'")]
    Unterminated(String),

    #[error("unmatched '}}' in '{0}'")]
    StrayBrace(String),

    #[error("empty placeholder name in '{0}'")]
    EmptyName(String),

    #[error("placeholders '{0}' and '{1}' are adjacent")]
    AdjacentPlaceholders(String, String),

    #[error("placeholder '{0}' appears twice")]
    DuplicateName(String),

    #[error("invalid pattern '{1}' for placeholder '{0}'")]
    InvalidPattern(String, String),
}

/// One segment of a placeholder pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),

    /// `*`
    Any,

    /// `**`, only as the last segment
    Rest,
}

impl Segment {
    fn accepts(&self, segment: &str) -> bool {
        match self {
            Segment::Literal(literal) => segment == literal,
            Segment::Any | Segment::Rest => !segment.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Literal(String),
    Variable { name: String, pattern: Vec<Segment> },
}

/// Parsed path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    parts: Vec<Part>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if !template.starts_with('/') {
            return Err(TemplateError::MissingLeadingSlash(template.to_string()));
        }

        let mut parts = Vec::new();
        let mut rest = template;

        let stray = || TemplateError::StrayBrace(template.to_string());

        while let Some(open) = rest.find('{') {
            if rest[..open].contains('}') {
                return Err(stray());
            }
            if open > 0 {
                parts.push(Part::Literal(rest[..open].to_string()));
            }

            let close = rest[open..]
                .find('}')
                .map(|i| open + i)
                .ok_or_else(|| TemplateError::Unterminated(template.to_string()))?;

            let inner = &rest[open + 1..close];
            let (name, pattern) = match inner.split_once('=') {
                Some((name, pattern)) => (name.trim(), Some(pattern.trim())),
                None => (inner.trim(), None),
            };
            if name.is_empty() {
                return Err(TemplateError::EmptyName(template.to_string()));
            }

            let pattern = match pattern {
                Some(p) => parse_pattern(name, p)?,
                None => vec![Segment::Any],
            };

            if let Some(Part::Variable { name: previous, .. }) = parts.last() {
                return Err(TemplateError::AdjacentPlaceholders(
                    previous.clone(),
                    name.to_string(),
                ));
            }
            if parts
                .iter()
                .any(|p| matches!(p, Part::Variable { name: n, .. } if n == name))
            {
                return Err(TemplateError::DuplicateName(name.to_string()));
            }

            parts.push(Part::Variable {
                name: name.to_string(),
                pattern,
            });
            rest = &rest[close + 1..];
        }

        if rest.contains('}') {
            return Err(stray());
        }
        if !rest.is_empty() {
            parts.push(Part::Literal(rest.to_string()));
        }

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Placeholder names in template order
    pub fn variables(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Variable { name, .. } => Some(name.as_str()),
                Part::Literal(_) => None,
            })
            .collect()
    }

    /// Axum route path covering every request this template can match.
    ///
    /// A template made only of plain literal segments is its own route. Any
    /// other template keeps its static prefix up to the last `/` before the
    /// first placeholder (or the first segment axum would read as syntax),
    /// extended by the literal segments that open the placeholder's pattern,
    /// and ends in a `{*rest}` catch-all. [`PathTemplate::match_path`] does
    /// the exact matching.
    pub fn router_path(&self) -> String {
        let prefix = match self.parts.first() {
            Some(Part::Literal(literal)) => literal.as_str(),
            _ => "",
        };
        let exact = self.parts.len() == 1;

        let mut stable = 0;
        for segment in prefix.split_inclusive('/') {
            if segment.starts_with(':') || segment.starts_with('*') {
                return format!("{}{{*rest}}", &prefix[..stable]);
            }
            stable += segment.len();
        }

        if exact {
            return prefix.to_string();
        }

        // The segment holding the first placeholder starts after the last '/'
        let cut = prefix.rfind('/').map(|i| i + 1).unwrap_or(0);
        let mut path = prefix[..cut].to_string();

        // Leading literal segments of a placeholder pattern are static too
        if cut == prefix.len() {
            if let Some(Part::Variable { pattern, .. }) = self.parts.get(1) {
                for pair in pattern.windows(2) {
                    match &pair[0] {
                        Segment::Literal(literal) if !literal.starts_with(':') => {
                            path.push_str(literal);
                            path.push('/');
                        }
                        _ => break,
                    }
                }
            }
        }

        path.push_str("{*rest}");
        path
    }

    /// Match a concrete path, returning `(name, value)` captures in template
    /// order. Captured values are returned verbatim.
    pub fn match_path(&self, path: &str) -> Option<Vec<(String, String)>> {
        let mut rest = path;
        let mut captures = Vec::new();

        for (index, part) in self.parts.iter().enumerate() {
            match part {
                Part::Literal(literal) => {
                    rest = rest.strip_prefix(literal.as_str())?;
                }
                Part::Variable { name, pattern } => {
                    let next = match self.parts.get(index + 1) {
                        Some(Part::Literal(literal)) => Some(literal.as_str()),
                        _ => None,
                    };
                    let end = capture_end(rest, pattern, next)?;
                    if end == 0 {
                        return None;
                    }
                    captures.push((name.clone(), rest[..end].to_string()));
                    rest = &rest[end..];
                }
            }
        }

        rest.is_empty().then_some(captures)
    }
}

fn parse_pattern(name: &str, pattern: &str) -> Result<Vec<Segment>, TemplateError> {
    let invalid = || TemplateError::InvalidPattern(name.to_string(), pattern.to_string());

    let segments: Vec<Segment> = pattern
        .split('/')
        .map(|segment| match segment {
            "" => Err(invalid()),
            "*" => Ok(Segment::Any),
            "**" => Ok(Segment::Rest),
            s if s.contains(['*', '{']) => Err(invalid()),
            s => Ok(Segment::Literal(s.to_string())),
        })
        .collect::<Result<_, _>>()?;

    let rest_before_end = segments
        .iter()
        .rev()
        .skip(1)
        .any(|segment| *segment == Segment::Rest);
    if rest_before_end {
        return Err(invalid());
    }

    Ok(segments)
}

/// Byte length of the capture at the start of `rest`
fn capture_end(rest: &str, pattern: &[Segment], next: Option<&str>) -> Option<usize> {
    let (last, leading) = pattern.split_last()?;

    let mut start = 0;
    for segment in leading {
        let len = rest[start..].find('/')?;
        if !segment.accepts(&rest[start..start + len]) {
            return None;
        }
        start += len + 1;
    }

    let tail = &rest[start..];
    let len = match last {
        Segment::Rest => match next {
            Some(literal) => tail.rfind(literal)?,
            None => tail.len(),
        },
        Segment::Literal(literal) => {
            if !tail.starts_with(literal.as_str()) {
                return None;
            }
            literal.len()
        }
        Segment::Any => {
            let segment_end = tail.find('/').unwrap_or(tail.len());
            match next {
                Some(literal) if !literal.starts_with('/') => tail[..segment_end].find(literal)?,
                _ => segment_end,
            }
        }
    };

    if len == 0 {
        return None;
    }
    Some(start + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captures(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn router_path(template: &str) -> String {
        PathTemplate::parse(template).unwrap().router_path()
    }

    #[test]
    fn test_parse_parts() {
        let template = PathTemplate::parse("/v1/users/{user_id}/books/{book}").unwrap();
        assert_eq!(template.variables(), vec!["user_id", "book"]);
        assert_eq!(
            template.parts()[0],
            Part::Literal("/v1/users/".to_string())
        );
        assert_eq!(
            template.parts()[1],
            Part::Variable {
                name: "user_id".to_string(),
                pattern: vec![Segment::Any],
            }
        );
    }

    #[test]
    fn test_parse_pattern_segments() {
        let template = PathTemplate::parse("/v1/{name=projects/*/topics/**}").unwrap();
        assert_eq!(
            template.parts()[1],
            Part::Variable {
                name: "name".to_string(),
                pattern: vec![
                    Segment::Literal("projects".to_string()),
                    Segment::Any,
                    Segment::Literal("topics".to_string()),
                    Segment::Rest,
                ],
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PathTemplate::parse("v1/users"),
            Err(TemplateError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{open"),
            Err(TemplateError::Unterminated(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{}"),
            Err(TemplateError::EmptyName(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{a}{b}"),
            Err(TemplateError::AdjacentPlaceholders(_, _))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{a}/x/{a}"),
            Err(TemplateError::DuplicateName(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{a=**/x}"),
            Err(TemplateError::InvalidPattern(_, _))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{a=p*}"),
            Err(TemplateError::InvalidPattern(_, _))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{a={b}"),
            Err(TemplateError::InvalidPattern(_, _))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/a}b"),
            Err(TemplateError::StrayBrace(_))
        ));
        assert!(matches!(
            PathTemplate::parse("/v1/{a=x//y}"),
            Err(TemplateError::InvalidPattern(_, _))
        ));
    }

    #[test]
    fn test_match_single_placeholder() {
        let template = PathTemplate::parse("/v1/users/{user_id}").unwrap();
        assert_eq!(
            template.match_path("/v1/users/42"),
            Some(captures(&[("user_id", "42")]))
        );
        assert_eq!(template.match_path("/v1/users/"), None);
        assert_eq!(template.match_path("/v1/users/42/extra"), None);
        assert_eq!(template.match_path("/v2/users/42"), None);
    }

    #[test]
    fn test_match_multiple_in_order() {
        let template = PathTemplate::parse("/v1/shelves/{shelf}/books/{book}").unwrap();
        assert_eq!(
            template.match_path("/v1/shelves/s1/books/b%202"),
            Some(captures(&[("shelf", "s1"), ("book", "b%202")]))
        );
    }

    #[test]
    fn test_match_literal_only() {
        let template = PathTemplate::parse("/v1/users").unwrap();
        assert_eq!(template.match_path("/v1/users"), Some(vec![]));
        assert_eq!(template.match_path("/v1/users/1"), None);
    }

    #[test]
    fn test_match_custom_verb_suffix() {
        let template = PathTemplate::parse("/v1/operations/{name}:cancel").unwrap();
        assert_eq!(
            template.match_path("/v1/operations/op-7:cancel"),
            Some(captures(&[("name", "op-7")]))
        );
        assert_eq!(template.match_path("/v1/operations/op-7"), None);
    }

    #[test]
    fn test_match_multi_segment_pattern() {
        let template = PathTemplate::parse("/v1/{name=projects/*}/topics").unwrap();
        assert_eq!(
            template.match_path("/v1/projects/p1/topics"),
            Some(captures(&[("name", "projects/p1")]))
        );
        assert_eq!(template.match_path("/v1/projects/topics"), None);
    }

    #[test]
    fn test_pattern_literals_must_match() {
        let projects = PathTemplate::parse("/v1/{name=projects/*}/topics").unwrap();
        let users = PathTemplate::parse("/v1/{name=users/*}/topics").unwrap();

        assert_eq!(projects.match_path("/v1/users/u1/topics"), None);
        assert_eq!(
            users.match_path("/v1/users/u1/topics"),
            Some(captures(&[("name", "users/u1")]))
        );
    }

    #[test]
    fn test_pattern_ending_in_literal() {
        let template = PathTemplate::parse("/v1/{name=shelves/*/settings}:get").unwrap();
        assert_eq!(
            template.match_path("/v1/shelves/s1/settings:get"),
            Some(captures(&[("name", "shelves/s1/settings")]))
        );
        assert_eq!(template.match_path("/v1/shelves/s1/config:get"), None);
    }

    #[test]
    fn test_match_rest_of_path() {
        let template = PathTemplate::parse("/files/{path=**}").unwrap();
        assert_eq!(
            template.match_path("/files/a/b/c.txt"),
            Some(captures(&[("path", "a/b/c.txt")]))
        );
        assert_eq!(template.match_path("/files/"), None);

        let scoped = PathTemplate::parse("/v1/{name=buckets/*/objects/**}").unwrap();
        assert_eq!(
            scoped.match_path("/v1/buckets/b1/objects/x/y"),
            Some(captures(&[("name", "buckets/b1/objects/x/y")]))
        );
        assert_eq!(scoped.match_path("/v1/buckets/b1/blobs/x/y"), None);
    }

    #[test]
    fn test_router_path() {
        assert_eq!(router_path("/v1/users"), "/v1/users");
        assert_eq!(router_path("/v1/users:batchGet"), "/v1/users:batchGet");
        assert_eq!(router_path("/v1/users/{user_id}"), "/v1/users/{*rest}");
        assert_eq!(
            router_path("/v1/shelves/{shelf}/books/{book}"),
            "/v1/shelves/{*rest}"
        );
        assert_eq!(router_path("/v1/{name=projects/*}"), "/v1/projects/{*rest}");
        assert_eq!(
            router_path("/v1/{name=projects/*/topics/*}:publish"),
            "/v1/projects/{*rest}"
        );
        assert_eq!(router_path("/v1/{name=**}"), "/v1/{*rest}");
        assert_eq!(router_path("/v1/x{name=projects/*}"), "/v1/{*rest}");
        assert_eq!(router_path("/v1/ops/x{name}"), "/v1/ops/{*rest}");
        assert_eq!(router_path("/{path=**}"), "/{*rest}");
        assert_eq!(router_path("/v1/:legacy"), "/v1/{*rest}");
    }
}
