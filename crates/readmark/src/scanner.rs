//! Source scanner
//!
//! Walks `.rs` files, parses them with `syn`, and records every reading mark
//! under its declaration identifier.
//!
//! # Architecture
//!
//! ```text
//! paths → [walkdir] → .rs file → syn::File → [Collector] → Registry
//!                                                 └──────→ Diagnostics
//! ```
//!
//! The module path of each file comes from its position in the package
//! (the nearest directory holding a `Cargo.toml`) and the package name.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::decl::{render_tokens, DeclId, ModulePath, SourceLocation};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ScanError;
use crate::registry::{Entry, Registry};
use readmark_syntax::{is_mark, item_attrs, item_kind_name, parse_mark, Target};

/// Everything a scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Recorded marks
    pub registry: Registry,

    /// Non-fatal findings
    pub diagnostics: Vec<Diagnostic>,

    /// Files parsed successfully
    pub files_scanned: usize,
}

/// Collects marks from source into a [`Registry`].
///
/// # Example
///
/// ```
/// use readmark::{DeclId, ModulePath, ScanConfig, Scanner, Status};
///
/// let mut scanner = Scanner::new(ScanConfig::default());
/// scanner
///     .scan_source(
///         "src/lib.rs",
///         ModulePath::root("demo"),
///         r#"
///             #[read(s = HAVE_READ, postil = ["runs once per file"])]
///             fn set_up() {}
///         "#,
///     )
///     .unwrap();
///
/// let outcome = scanner.finish();
/// let entry = outcome.registry.get(&DeclId::new("demo::set_up")).unwrap();
/// assert_eq!(entry.status(), Status::Read);
/// ```
#[derive(Debug)]
pub struct Scanner {
    config: ScanConfig,
    outcome: ScanOutcome,
    crate_names: HashMap<PathBuf, String>,
    seen: HashSet<PathBuf>,
}

impl Scanner {
    /// Create a scanner.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            outcome: ScanOutcome::default(),
            crate_names: HashMap::new(),
            seen: HashSet::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan source text whose items live in `module`.
    ///
    /// `file` labels locations in the registry and in diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the text is not valid Rust (regardless of
    /// `fail_fast`), and `Registry` if a declaration is marked twice.
    pub fn scan_source(
        &mut self,
        file: &str,
        module: ModulePath,
        source: &str,
    ) -> Result<(), ScanError> {
        let ast = syn::parse_file(source).map_err(|err| ScanError::Parse {
            location: SourceLocation::from_span(file, err.span()),
            message: err.to_string(),
        })?;

        let mut collector = Collector::new(&self.config, file, module);
        collector.visit_file(&ast);

        tracing::debug!(
            file,
            marks = collector.entries.len(),
            diagnostics = collector.diagnostics.len(),
            "scanned file"
        );

        for (id, entry) in collector.entries {
            self.outcome.registry.insert(id, entry)?;
        }
        for diagnostic in collector.diagnostics {
            tracing::warn!("{}", diagnostic);
            self.outcome.diagnostics.push(diagnostic);
        }
        self.outcome.files_scanned += 1;
        Ok(())
    }

    /// Scan one file.
    ///
    /// Unless `fail_fast` is set, a file that does not parse is skipped
    /// with a diagnostic. A file already scanned, under any path that
    /// resolves to it, is not scanned again.
    pub fn scan_file(&mut self, path: &Path) -> Result<(), ScanError> {
        let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !self.seen.insert(resolved) {
            tracing::debug!(path = %path.display(), "already scanned");
            return Ok(());
        }

        let source = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let module = self.module_path_for(path);
        let label = path.display().to_string();

        match self.scan_source(&label, module, &source) {
            Err(ScanError::Parse { location, message }) if !self.config.fail_fast => {
                let diagnostic =
                    Diagnostic::new(location, DiagnosticKind::SkippedFile { message });
                tracing::warn!("{}", diagnostic);
                self.outcome.diagnostics.push(diagnostic);
                Ok(())
            }
            other => other,
        }
    }

    /// Scan a file, or every `.rs` file below a directory.
    ///
    /// Directories named in `exclude` are not entered. Files are visited in
    /// name order so that registry order is stable.
    pub fn scan_path(&mut self, path: &Path) -> Result<(), ScanError> {
        if path.is_file() {
            return self.scan_file(path);
        }

        let config = self.config.clone();
        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                let excluded = entry.depth() > 0
                    && entry.file_type().is_dir()
                    && config.is_excluded(&entry.file_name().to_string_lossy());
                !excluded
            });

        for entry in walker {
            let entry = entry?;
            let is_rust = entry.path().extension().is_some_and(|ext| ext == "rs");
            if entry.file_type().is_file() && is_rust {
                self.scan_file(entry.path())?;
            }
        }
        Ok(())
    }

    /// Scan several paths and return the outcome.
    pub fn scan_paths(mut self, paths: &[PathBuf]) -> Result<ScanOutcome, ScanError> {
        for path in paths {
            self.scan_path(path)?;
        }
        let outcome = self.finish();
        tracing::info!(
            files = outcome.files_scanned,
            marks = outcome.registry.len(),
            diagnostics = outcome.diagnostics.len(),
            "scan complete"
        );
        Ok(outcome)
    }

    /// Stop scanning and return what was collected.
    pub fn finish(self) -> ScanOutcome {
        self.outcome
    }

    /// Module path of a file on disk.
    fn module_path_for(&mut self, path: &Path) -> ModulePath {
        let Some(package_root) = find_package_root(path) else {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "crate".to_string());
            return ModulePath::root(stem);
        };

        let crate_name = self
            .crate_names
            .entry(package_root.clone())
            .or_insert_with(|| crate_name(&package_root))
            .clone();
        let relative = path.strip_prefix(&package_root).unwrap_or(path);
        ModulePath::for_relative_file(&crate_name, relative)
    }
}

/// Nearest ancestor directory of `path` containing a `Cargo.toml`.
fn find_package_root(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .skip(1)
        .find(|dir| dir.join("Cargo.toml").is_file())
        .map(Path::to_path_buf)
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
}

/// Crate name of the package at `root`: the manifest's package name, else
/// the directory name, with `-` replaced by `_`.
fn crate_name(root: &Path) -> String {
    let manifest_path = root.join("Cargo.toml");
    let from_manifest = std::fs::read_to_string(&manifest_path)
        .ok()
        .and_then(|text| match toml::from_str::<Manifest>(&text) {
            Ok(manifest) => manifest.package.map(|package| package.name),
            Err(err) => {
                tracing::warn!(path = %manifest_path.display(), "unreadable manifest: {}", err);
                None
            }
        });

    let name = from_manifest
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "crate".to_string());
    name.replace('-', "_")
}

// ═══════════════════════════════════════════════════════════════════════
// COLLECTOR
// ═══════════════════════════════════════════════════════════════════════

/// AST visitor recording marks for one file.
struct Collector<'a> {
    config: &'a ScanConfig,
    file: &'a str,
    module: ModulePath,
    entries: Vec<(DeclId, Entry)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Collector<'a> {
    fn new(config: &'a ScanConfig, file: &'a str, module: ModulePath) -> Self {
        Self {
            config,
            file,
            module,
            entries: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn marks<'b>(&self, attrs: &'b [syn::Attribute]) -> Vec<&'b syn::Attribute> {
        attrs
            .iter()
            .filter(|attr| is_mark(attr, &self.config.attribute))
            .collect()
    }

    fn location(&self, attr: &syn::Attribute) -> SourceLocation {
        SourceLocation::from_span(self.file, attr.span())
    }

    /// Record every mark in `attrs` under `id`. Returns whether any was
    /// found, parsed or not.
    fn record(&mut self, id: DeclId, kind: Target, attrs: &[syn::Attribute]) -> bool {
        let marks = self.marks(attrs);
        for attr in &marks {
            let location = self.location(attr);
            match parse_mark(attr) {
                Ok(mark) => self
                    .entries
                    .push((id.clone(), Entry::new(kind, mark, location))),
                Err(err) => self.diagnostics.push(Diagnostic::new(
                    location,
                    DiagnosticKind::MalformedMark {
                        id: id.clone(),
                        message: err.to_string(),
                    },
                )),
            }
        }
        !marks.is_empty()
    }

    /// Visit a body whose nested items live under `scope`.
    fn visit_nested(&mut self, scope: &[&str], block: &syn::Block) {
        for segment in scope {
            self.module.push(*segment);
        }
        visit::visit_block(self, block);
        for _ in scope {
            self.module.pop();
        }
    }

    fn reject(&mut self, attrs: &[syn::Attribute], target: &str) {
        for attr in self.marks(attrs) {
            let location = self.location(attr);
            self.diagnostics.push(Diagnostic::new(
                location,
                DiagnosticKind::UnsupportedTarget {
                    target: target.to_string(),
                },
            ));
        }
    }

    fn record_fields<'f>(
        &mut self,
        owner: &str,
        owner_marked: bool,
        fields: impl Iterator<Item = &'f syn::Field>,
    ) {
        if !self.config.include_fields {
            return;
        }
        for (index, field) in fields.enumerate() {
            let name = field
                .ident
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| index.to_string());
            let id = DeclId::field(&self.module, owner, &name);
            let marked = self.record(id.clone(), Target::Field, &field.attrs);

            if marked && !owner_marked {
                let location = self.location(self.marks(&field.attrs)[0]);
                self.diagnostics.push(Diagnostic::new(
                    location,
                    DiagnosticKind::FieldOutsideMarkedType { id },
                ));
            }
        }
    }
}

impl<'ast> Visit<'ast> for Collector<'_> {
    fn visit_item(&mut self, item: &'ast syn::Item) {
        if Target::of_item(item).is_none() {
            self.reject(item_attrs(item), item_kind_name(item));
        }
        visit::visit_item(self, item);
    }

    fn visit_item_mod(&mut self, item: &'ast syn::ItemMod) {
        if let Some((_, items)) = &item.content {
            self.module.push(item.ident.to_string());
            for item in items {
                self.visit_item(item);
            }
            self.module.pop();
        }
    }

    fn visit_item_fn(&mut self, item: &'ast syn::ItemFn) {
        let name = item.sig.ident.to_string();
        self.record(DeclId::item(&self.module, &name), Target::Method, &item.attrs);

        // Items nested in the body live under the function's name.
        self.visit_nested(&[name.as_str()], &item.block);
    }

    fn visit_item_struct(&mut self, item: &'ast syn::ItemStruct) {
        let name = item.ident.to_string();
        let marked = self.record(DeclId::item(&self.module, &name), Target::Type, &item.attrs);
        self.record_fields(&name, marked, item.fields.iter());
    }

    fn visit_item_union(&mut self, item: &'ast syn::ItemUnion) {
        let name = item.ident.to_string();
        let marked = self.record(DeclId::item(&self.module, &name), Target::Type, &item.attrs);
        self.record_fields(&name, marked, item.fields.named.iter());
    }

    fn visit_item_enum(&mut self, item: &'ast syn::ItemEnum) {
        let name = item.ident.to_string();
        self.record(DeclId::item(&self.module, &name), Target::Type, &item.attrs);

        for variant in &item.variants {
            self.reject(&variant.attrs, "enum variant");
            for field in &variant.fields {
                self.reject(&field.attrs, "enum variant field");
            }
        }
    }

    fn visit_item_type(&mut self, item: &'ast syn::ItemType) {
        let id = DeclId::item(&self.module, &item.ident.to_string());
        self.record(id, Target::Type, &item.attrs);
    }

    fn visit_item_trait_alias(&mut self, item: &'ast syn::ItemTraitAlias) {
        let id = DeclId::item(&self.module, &item.ident.to_string());
        self.record(id, Target::Type, &item.attrs);
    }

    fn visit_item_trait(&mut self, item: &'ast syn::ItemTrait) {
        let name = item.ident.to_string();
        self.record(DeclId::item(&self.module, &name), Target::Type, &item.attrs);

        for trait_item in &item.items {
            match trait_item {
                syn::TraitItem::Fn(f) => {
                    let method = f.sig.ident.to_string();
                    let id = DeclId::member(&self.module, &name, &method);
                    self.record(id, Target::Method, &f.attrs);
                    if let Some(block) = &f.default {
                        self.visit_nested(&[name.as_str(), method.as_str()], block);
                    }
                }
                syn::TraitItem::Type(t) => {
                    let id = DeclId::member(&self.module, &name, &t.ident.to_string());
                    self.record(id, Target::Type, &t.attrs);
                }
                syn::TraitItem::Const(c) => self.reject(&c.attrs, "associated constant"),
                syn::TraitItem::Macro(m) => self.reject(&m.attrs, "macro invocation"),
                _ => {}
            }
        }
    }

    fn visit_item_foreign_mod(&mut self, item: &'ast syn::ItemForeignMod) {
        for foreign_item in &item.items {
            match foreign_item {
                syn::ForeignItem::Fn(f) => {
                    let id = DeclId::item(&self.module, &f.sig.ident.to_string());
                    self.record(id, Target::Method, &f.attrs);
                }
                syn::ForeignItem::Type(t) => {
                    let id = DeclId::item(&self.module, &t.ident.to_string());
                    self.record(id, Target::Type, &t.attrs);
                }
                syn::ForeignItem::Static(s) => self.reject(&s.attrs, "foreign static"),
                syn::ForeignItem::Macro(m) => self.reject(&m.attrs, "macro invocation"),
                _ => {}
            }
        }
    }

    fn visit_item_impl(&mut self, item: &'ast syn::ItemImpl) {
        let self_ty = render_tokens(&item.self_ty);
        let trait_path = item
            .trait_
            .as_ref()
            .map(|(_, path, _)| render_tokens(path));

        let member_id = |module: &ModulePath, name: &str| match &trait_path {
            Some(trait_path) => DeclId::trait_member(module, &self_ty, trait_path, name),
            None => DeclId::member(module, &self_ty, name),
        };
        let owner = match &trait_path {
            Some(trait_path) => format!("<{} as {}>", self_ty, trait_path),
            None => self_ty.clone(),
        };

        for impl_item in &item.items {
            match impl_item {
                syn::ImplItem::Fn(f) => {
                    let method = f.sig.ident.to_string();
                    let id = member_id(&self.module, &method);
                    self.record(id, Target::Method, &f.attrs);
                    self.visit_nested(&[owner.as_str(), method.as_str()], &f.block);
                }
                syn::ImplItem::Type(t) => {
                    let id = member_id(&self.module, &t.ident.to_string());
                    self.record(id, Target::Type, &t.attrs);
                }
                syn::ImplItem::Const(c) => self.reject(&c.attrs, "associated constant"),
                syn::ImplItem::Macro(m) => self.reject(&m.attrs, "macro invocation"),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use pretty_assertions::assert_eq;
    use readmark_syntax::Status;

    fn scan(source: &str) -> ScanOutcome {
        let mut scanner = Scanner::new(ScanConfig::default());
        scanner
            .scan_source("src/lib.rs", ModulePath::root("demo"), source)
            .unwrap();
        scanner.finish()
    }

    fn ids(outcome: &ScanOutcome) -> Vec<String> {
        outcome
            .registry
            .iter()
            .map(|(id, _)| id.to_string())
            .collect()
    }

    #[test]
    fn test_types_and_functions() {
        let outcome = scan(
            r#"
            #[read(s = READING)]
            struct Subject { id: i32 }

            #[read]
            enum Outcome { Mapped, Failed }

            #[read(s = HAVE_READ)]
            fn set_up() {}

            #[read(s = NOTICE)]
            type Rows = Vec<Subject>;

            fn unmarked() {}
            "#,
        );
        assert_eq!(
            ids(&outcome),
            vec!["demo::Subject", "demo::Outcome", "demo::set_up", "demo::Rows"]
        );
        let entry = outcome.registry.get(&DeclId::new("demo::set_up")).unwrap();
        assert_eq!(entry.kind, Target::Method);
        assert_eq!(entry.status(), Status::Read);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_methods_in_impls_and_traits() {
        let outcome = scan(
            r#"
            trait Mapper {
                #[read(s = HAVE_READ)]
                fn get(&self) -> u8;
                #[read]
                type Row;
            }

            impl Wrapper<u8> {
                #[read(s = READING)]
                fn new() -> Self { todo!() }
            }

            impl Mapper for Wrapper<u8> {
                #[read(s = NOTICE)]
                fn get(&self) -> u8 { 1 }
                #[read]
                type Row = u8;
            }
            "#,
        );
        assert_eq!(
            ids(&outcome),
            vec![
                "demo::Mapper::get",
                "demo::Mapper::Row",
                "demo::Wrapper<u8>::new",
                "demo::<Wrapper<u8> as Mapper>::get",
                "demo::<Wrapper<u8> as Mapper>::Row",
            ]
        );
    }

    #[test]
    fn test_fields() {
        let outcome = scan(
            r#"
            #[read]
            struct Test {
                #[read(s = HAVE_READ, postil = ["shared"])]
                factory: u8,
                plain: u8,
            }

            #[read]
            struct Pair(u8, #[read(s = NOTICE)] u16);
            "#,
        );
        assert_eq!(
            ids(&outcome),
            vec!["demo::Test", "demo::Test.factory", "demo::Pair", "demo::Pair.1"]
        );
        let field = outcome
            .registry
            .get(&DeclId::new("demo::Test.factory"))
            .unwrap();
        assert_eq!(field.kind, Target::Field);
        assert_eq!(field.mark.notes(), ["shared".to_string()]);
    }

    #[test]
    fn test_fields_can_be_excluded() {
        let config = ScanConfig {
            include_fields: false,
            ..Default::default()
        };
        let mut scanner = Scanner::new(config);
        scanner
            .scan_source(
                "src/lib.rs",
                ModulePath::root("demo"),
                "#[read] struct A { #[read] x: u8 }",
            )
            .unwrap();
        let outcome = scanner.finish();
        assert_eq!(ids(&outcome), vec!["demo::A"]);
    }

    #[test]
    fn test_field_outside_marked_type() {
        let outcome = scan("struct A { #[read] x: u8 }");
        assert_eq!(ids(&outcome), vec!["demo::A.x"]);
        assert!(matches!(
            outcome.diagnostics[0].kind,
            DiagnosticKind::FieldOutsideMarkedType { .. }
        ));
    }

    #[test]
    fn test_inline_modules_and_nested_items() {
        let outcome = scan(
            r#"
            mod mapper {
                #[read]
                struct Subject;

                mod inner {
                    #[read]
                    fn deep() {}
                }
            }

            #[read]
            fn outer() {
                #[read]
                fn helper() {}
            }
            "#,
        );
        assert_eq!(
            ids(&outcome),
            vec![
                "demo::mapper::Subject",
                "demo::mapper::inner::deep",
                "demo::outer",
                "demo::outer::helper",
            ]
        );
    }

    #[test]
    fn test_items_nested_in_method_bodies() {
        let outcome = scan(
            r#"
            impl A {
                fn run(&self) {
                    #[read(s = NOTICE)]
                    fn helper() {}
                }
            }

            impl Mapper for A {
                fn get(&self) {
                    #[read]
                    struct Row;
                }
            }

            trait T {
                fn provided(&self) {
                    #[read]
                    struct Local;
                }
                fn required(&self);
            }
            "#,
        );
        assert_eq!(
            ids(&outcome),
            vec![
                "demo::A::run::helper",
                "demo::<A as Mapper>::get::Row",
                "demo::T::provided::Local",
            ]
        );
        let helper = outcome
            .registry
            .get(&DeclId::new("demo::A::run::helper"))
            .unwrap();
        assert_eq!(helper.status(), Status::Notice);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_foreign_items() {
        let outcome = scan(
            r#"
            extern "C" {
                #[read(s = READING)]
                fn abs(input: i32) -> i32;

                #[read]
                static errno: i32;
            }
            "#,
        );
        assert_eq!(ids(&outcome), vec!["demo::abs"]);
        assert_eq!(
            outcome.registry.get(&DeclId::new("demo::abs")).unwrap().kind,
            Target::Method
        );
        match &outcome.diagnostics[0].kind {
            DiagnosticKind::UnsupportedTarget { target } => assert_eq!(target, "foreign static"),
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_targets_are_diagnosed() {
        let outcome = scan(
            r#"
            #[read]
            mod m {}

            #[read]
            const X: u8 = 1;

            #[read]
            impl A {}

            #[read]
            enum E {
                #[read]
                V,
            }
            "#,
        );
        assert_eq!(ids(&outcome), vec!["demo::E"]);
        let targets: Vec<_> = outcome
            .diagnostics
            .iter()
            .map(|d| match &d.kind {
                DiagnosticKind::UnsupportedTarget { target } => target.clone(),
                other => panic!("unexpected diagnostic {:?}", other),
            })
            .collect();
        assert_eq!(targets, vec!["module", "constant", "impl block", "enum variant"]);
    }

    #[test]
    fn test_malformed_mark_is_diagnosed_not_recorded() {
        let outcome = scan("#[read(s = DONE)] fn f() {}");
        assert!(outcome.registry.is_empty());
        match &outcome.diagnostics[0].kind {
            DiagnosticKind::MalformedMark { id, message } => {
                assert_eq!(id.as_str(), "demo::f");
                assert!(message.contains("unknown reading status"));
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_mark_is_an_error() {
        let mut scanner = Scanner::new(ScanConfig::default());
        let err = scanner
            .scan_source(
                "src/lib.rs",
                ModulePath::root("demo"),
                "#[read]\n#[read(s = HAVE_READ)]\nfn f() {}",
            )
            .unwrap_err();
        match err {
            ScanError::Registry(RegistryError::DuplicateMark { id, first, second }) => {
                assert_eq!(id.as_str(), "demo::f");
                assert_eq!(first.line, 1);
                assert_eq!(second.line, 2);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_notes_keep_order() {
        let outcome = scan(r#"#[read(postil = ["a", "b"])] fn f() {}"#);
        let entry = outcome.registry.get(&DeclId::new("demo::f")).unwrap();
        assert_eq!(entry.status(), Status::Unread);
        assert_eq!(entry.mark.notes(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_locations() {
        let outcome = scan("\n\n    #[read]\n    fn f() {}\n");
        let entry = outcome.registry.get(&DeclId::new("demo::f")).unwrap();
        assert_eq!(entry.location, SourceLocation::new("src/lib.rs", 3, 5));
    }

    #[test]
    fn test_qualified_and_custom_attribute_names() {
        let outcome = scan("#[readmark::read(s = READING)] fn f() {}");
        assert_eq!(ids(&outcome), vec!["demo::f"]);

        let mut scanner = Scanner::new(ScanConfig::with_attribute("reviewed"));
        scanner
            .scan_source(
                "src/lib.rs",
                ModulePath::root("demo"),
                "#[reviewed(s = HAVE_READ)] fn f() {} #[read] fn g() {}",
            )
            .unwrap();
        assert_eq!(ids(&scanner.finish()), vec!["demo::f"]);
    }

    #[test]
    fn test_parse_error_from_source() {
        let mut scanner = Scanner::new(ScanConfig::default());
        let err = scanner
            .scan_source("src/broken.rs", ModulePath::root("demo"), "fn f( {")
            .unwrap_err();
        assert!(matches!(err, ScanError::Parse { .. }));
    }
}
