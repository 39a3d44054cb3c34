//! Console rendering of lookup results
//!
//! The layout is fixed: a `@ query` header, optional phonetics, then numbered
//! `[翻译]`, `[延伸]` and `[网络]` sections. List entries are 1-based.

use std::io::{self, Write};

use crate::providers::baidu::BaiduResponse;
use crate::providers::youdao::YoudaoResponse;

/// Printed in place of a Youdao result when `errorCode` is not `"0"`
pub const YOUDAO_FAILURE_TEXT: &str = "服务调用失败";

/// Parsed result of one lookup, ready to print
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// Youdao result; the response echoes the query itself
    Youdao(YoudaoResponse),
    /// Baidu does not echo the query, so the request's copy is kept
    Baidu {
        /// Query as sent
        query: String,
        /// Decoded body
        response: BaiduResponse,
    },
}

/// What rendering found in the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every section was printed
    Complete,
    /// The service reported an error code; nothing else was printed
    ProviderError(String),
}

impl Translation {
    /// Write the result in the console layout of its provider
    pub fn render(&self, w: &mut dyn Write) -> io::Result<RenderOutcome> {
        match self {
            Translation::Youdao(response) => render_youdao(response, w),
            Translation::Baidu { query, response } => render_baidu(query, response, w),
        }
    }
}

/// Youdao layout: header, phonetics, then `[翻译]`, `[延伸]` and `[网络]`.
///
/// A non-`"0"` `errorCode`, including an empty one, prints only
/// [`YOUDAO_FAILURE_TEXT`].
pub fn render_youdao(resp: &YoudaoResponse, w: &mut dyn Write) -> io::Result<RenderOutcome> {
    if !resp.is_success() {
        writeln!(w, "{}", YOUDAO_FAILURE_TEXT)?;
        return Ok(RenderOutcome::ProviderError(resp.error_code.clone()));
    }

    writeln!(w, "@ {}", resp.query)?;

    if !resp.basic.uk_phonetic.is_empty() {
        writeln!(w, "英: [ {} ]", resp.basic.uk_phonetic)?;
    }
    if !resp.basic.us_phonetic.is_empty() {
        writeln!(w, "美: [ {} ]", resp.basic.us_phonetic)?;
    }

    writeln!(w, "[翻译]")?;
    write_numbered(w, &resp.translation)?;

    writeln!(w, "[延伸]")?;
    write_numbered(w, &resp.basic.explains)?;

    writeln!(w, "[网络]")?;
    for (i, entry) in resp.web.iter().enumerate() {
        writeln!(w, "\t {} . {}", i + 1, entry.key)?;
        write!(w, "\t翻译:")?;
        for value in &entry.value {
            write!(w, "{},", value)?;
        }
        writeln!(w)?;
    }

    Ok(RenderOutcome::Complete)
}

/// Baidu layout: header and `[翻译]`. On error the raw code is printed instead
pub fn render_baidu(
    query: &str,
    resp: &BaiduResponse,
    w: &mut dyn Write,
) -> io::Result<RenderOutcome> {
    if !resp.is_success() {
        writeln!(w, "{}", resp.error_code)?;
        return Ok(RenderOutcome::ProviderError(resp.error_code.clone()));
    }

    writeln!(w, "@ {}", query)?;

    writeln!(w, "[翻译]")?;
    let lines: Vec<&str> = resp.trans_result.iter().map(|r| r.dst.as_str()).collect();
    write_numbered(w, &lines)?;

    Ok(RenderOutcome::Complete)
}

fn write_numbered<S: AsRef<str>>(w: &mut dyn Write, items: &[S]) -> io::Result<()> {
    for (i, item) in items.iter().enumerate() {
        writeln!(w, "\t {} . {}", i + 1, item.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::baidu::TransResult;
    use crate::providers::youdao::{BasicBlock, WebEntry};

    fn render_to_string(translation: &Translation) -> (RenderOutcome, String) {
        let mut out = Vec::new();
        let outcome = translation.render(&mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn youdao_ok() -> YoudaoResponse {
        YoudaoResponse {
            error_code: "0".to_string(),
            query: "good".to_string(),
            translation: vec!["好".to_string()],
            basic: BasicBlock {
                uk_phonetic: "ɡʊd".to_string(),
                us_phonetic: "ɡʊd".to_string(),
                explains: vec!["adj. 好的".to_string(), "n. 好处".to_string()],
                ..Default::default()
            },
            web: vec![WebEntry {
                key: "Good".to_string(),
                value: vec!["良好".to_string(), "善".to_string()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_youdao_full_layout() {
        let (outcome, text) = render_to_string(&Translation::Youdao(youdao_ok()));

        assert_eq!(outcome, RenderOutcome::Complete);
        assert_eq!(
            text,
            "@ good\n\
             英: [ ɡʊd ]\n\
             美: [ ɡʊd ]\n\
             [翻译]\n\
             \t 1 . 好\n\
             [延伸]\n\
             \t 1 . adj. 好的\n\
             \t 2 . n. 好处\n\
             [网络]\n\
             \t 1 . Good\n\
             \t翻译:良好,善,\n"
        );
    }

    #[test]
    fn test_youdao_skips_empty_phonetics() {
        let mut resp = youdao_ok();
        resp.basic.uk_phonetic.clear();
        let (_, text) = render_to_string(&Translation::Youdao(resp));

        assert!(!text.contains("英:"));
        assert!(text.contains("美: [ ɡʊd ]"));
    }

    #[test]
    fn test_youdao_translations_in_order() {
        let resp = YoudaoResponse {
            error_code: "0".to_string(),
            query: "x".to_string(),
            translation: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        let (_, text) = render_to_string(&Translation::Youdao(resp));

        assert_eq!(text, "@ x\n[翻译]\n\t 1 . a\n\t 2 . b\n[延伸]\n[网络]\n");
    }

    #[test]
    fn test_youdao_error_prints_only_failure_text() {
        let resp = YoudaoResponse {
            error_code: "52001".to_string(),
            query: "ignored".to_string(),
            translation: vec!["ignored".to_string()],
            ..Default::default()
        };
        let (outcome, text) = render_to_string(&Translation::Youdao(resp));

        assert_eq!(outcome, RenderOutcome::ProviderError("52001".to_string()));
        assert_eq!(text, "服务调用失败\n");
    }

    #[test]
    fn test_youdao_empty_response_is_failure() {
        let (outcome, text) = render_to_string(&Translation::Youdao(YoudaoResponse::default()));
        assert_eq!(outcome, RenderOutcome::ProviderError(String::new()));
        assert_eq!(text, "服务调用失败\n");
    }

    #[test]
    fn test_baidu_layout() {
        let translation = Translation::Baidu {
            query: "apple pie".to_string(),
            response: BaiduResponse {
                trans_result: vec![
                    TransResult {
                        src: "apple".to_string(),
                        dst: "a".to_string(),
                    },
                    TransResult {
                        src: "pie".to_string(),
                        dst: "b".to_string(),
                    },
                ],
                ..Default::default()
            },
        };
        let (outcome, text) = render_to_string(&translation);

        assert_eq!(outcome, RenderOutcome::Complete);
        assert_eq!(text, "@ apple pie\n[翻译]\n\t 1 . a\n\t 2 . b\n");
    }

    #[test]
    fn test_baidu_error_prints_code() {
        let translation = Translation::Baidu {
            query: "apple".to_string(),
            response: BaiduResponse {
                error_code: "52001".to_string(),
                error_msg: "TIMEOUT".to_string(),
                ..Default::default()
            },
        };
        let (outcome, text) = render_to_string(&translation);

        assert_eq!(outcome, RenderOutcome::ProviderError("52001".to_string()));
        assert_eq!(text, "52001\n");
    }
}
