use crate::config::ConvertConfig;
use crate::error::ConvertError;
use domsvg_render_core::{SvgDocument, SvgNodeId};
use domsvg_traits::VisualDocument;

/// Mutable state shared by every step of one conversion.
///
/// The context owns the output document and tracks three places in it: the
/// root, the singleton `<defs>` container for paint servers, and the cursor
/// new primitives are appended to. It is threaded by `&mut` through the
/// depth-first walk; nothing about a conversion lives outside of it.
#[derive(Debug)]
pub struct ConversionContext<'a, D: VisualDocument + ?Sized> {
    document: &'a D,
    config: ConvertConfig,
    output: SvgDocument,
    defs: Option<SvgNodeId>,
    cursor: Option<SvgNodeId>,
    next_paint_id: usize,
}

impl<'a, D: VisualDocument + ?Sized> ConversionContext<'a, D> {
    pub fn new(document: &'a D) -> Self {
        Self::with_config(document, ConvertConfig::default())
    }

    pub fn with_config(document: &'a D, config: ConvertConfig) -> Self {
        Self {
            document,
            config,
            output: SvgDocument::new(),
            defs: None,
            cursor: None,
            next_paint_id: 0,
        }
    }

    /// The visual document being converted.
    pub fn document(&self) -> &'a D {
        self.document
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// The output root, once the first conversion call has created it.
    pub fn root(&self) -> Option<SvgNodeId> {
        self.output.root()
    }

    pub fn output(&self) -> &SvgDocument {
        &self.output
    }

    pub fn into_output(self) -> SvgDocument {
        self.output
    }

    pub(crate) fn output_mut(&mut self) -> &mut SvgDocument {
        &mut self.output
    }

    /// The `<defs>` container, appended to `root` the first time it is needed.
    pub(crate) fn ensure_defs(&mut self, root: SvgNodeId) -> SvgNodeId {
        if let Some(defs) = self.defs {
            return defs;
        }
        let defs = self.output.create_element("defs");
        self.output.append_child(root, defs);
        self.defs = Some(defs);
        defs
    }

    /// Where new output attaches: the innermost open group, else the root.
    pub(crate) fn cursor(&self) -> Option<SvgNodeId> {
        self.cursor.or_else(|| self.output.root())
    }

    /// Runs `f` with `group` as the cursor and restores the previous cursor
    /// afterwards, whether `f` succeeds or not.
    pub(crate) fn with_cursor<F>(&mut self, group: SvgNodeId, f: F) -> Result<(), ConvertError>
    where
        F: FnOnce(&mut Self) -> Result<(), ConvertError>,
    {
        let previous = self.cursor.replace(group);
        let result = f(self);
        self.cursor = previous;
        result
    }

    /// A fresh number for paint-server identifiers, unique per conversion.
    pub(crate) fn next_paint_id(&mut self) -> usize {
        let id = self.next_paint_id;
        self.next_paint_id += 1;
        id
    }
}
