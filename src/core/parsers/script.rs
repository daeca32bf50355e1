use std::path::Path;

use anyhow::{Result, anyhow};
use swc_common::{
    BytePos, FileName, GLOBALS, Globals, SourceMap, Span, Spanned,
    comments::{Comment as SwcComment, CommentKind as SwcCommentKind, SingleThreadedComments},
};
use swc_ecma_ast::{Module, ModuleItem};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::comments::{Comment, CommentKind, Location, Program, SourceFile, Statement};

/// UTF-8 byte order mark. swc skips it, so it is cut off before parsing.
const BOM: char = '\u{feff}';

/// File extensions handled by [`parse_source`].
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

/// Pick the swc syntax for a file from its extension.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let ext = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match ext {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            decorators: true,
            dts: file_path.ends_with(".d.ts"),
            ..Default::default()
        }),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse JS/TS source code into the per-file record the rules consume.
///
/// Comments come from swc's comment store (leading and trailing), sorted by
/// offset. The program's start is the first top-level item, so leading
/// comments sit before it. A leading BOM is removed from
/// [`SourceFile::source`] and remembered in [`SourceFile::bom`].
pub fn parse_source(code: String, file_path: &str) -> Result<SourceFile> {
    let bom = code.starts_with(BOM);
    let code = if bom {
        code[BOM.len_utf8()..].to_string()
    } else {
        code
    };

    GLOBALS.set(&Globals::new(), || {
        let source_map = SourceMap::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );
        let module: Module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        let base = source_file.start_pos;
        let offset = |pos: BytePos| (pos.0.saturating_sub(base.0)) as usize;
        let range = |span: Span| offset(span.lo)..offset(span.hi);

        let (leading, trailing) = comments.borrow_all();
        let mut collected: Vec<Comment> = leading
            .iter()
            .chain(trailing.iter())
            .flat_map(|(_, cmts)| cmts.iter())
            .map(|cmt| convert_comment(cmt, &source_map, range(cmt.span)))
            .collect();
        collected.sort_by_key(|cmt| cmt.range.start);
        collected.dedup_by_key(|cmt| cmt.range.start);

        let body: Vec<Statement> = module
            .body
            .iter()
            .map(|item: &ModuleItem| Statement {
                range: range(item.span()),
            })
            .collect();
        let program = Program {
            start: body.first().map_or(code.len(), |stmt| stmt.range.start),
            end: code.len(),
            body,
        };

        Ok(SourceFile {
            path: file_path.to_string(),
            source: code,
            bom,
            comments: collected,
            program,
        })
    })
}

fn convert_comment(
    cmt: &SwcComment,
    source_map: &SourceMap,
    range: std::ops::Range<usize>,
) -> Comment {
    let start = source_map.lookup_char_pos(cmt.span.lo);
    let end = source_map.lookup_char_pos(cmt.span.hi);
    Comment {
        kind: match cmt.kind {
            SwcCommentKind::Line => CommentKind::Line,
            SwcCommentKind::Block => CommentKind::Block,
        },
        text: cmt.text.to_string(),
        start: Location::new(start.line, start.col.0),
        end: Location::new(end.line, end.col.0),
        range,
    }
}
