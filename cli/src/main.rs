use anyhow::{Context, anyhow, bail};
use clap::Parser;
use cli::{Args, Command, Input, Language, LogFormat, OutputFormat};
use oxont::results::{QueryResult, ResultsFormat, read_results};
use oxont::tools::named_hierarchy_roots;
use oxont::{
    DEFAULT_POLICY_PATH, OntClass, OntDocumentManager, OntError, OntLanguage, OntModel,
    OntModelSpec, OntProperty, OntResource,
};
use oxrdfio::RdfFormat;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Write, stdout};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format)?;
    let spec = OntModelSpec::new(language(args.language)).with_strict_mode(!args.no_strict);
    let manager =
        OntDocumentManager::from_search_path(args.policy.as_deref().unwrap_or(DEFAULT_POLICY_PATH));
    let mut out = stdout().lock();
    match args.command {
        Command::Classes {
            input,
            roots,
            format,
        } => {
            let model = load_model(spec, &input, &manager)?;
            let classes = if roots {
                named_hierarchy_roots(&model)?
            } else {
                model.list_classes()?
            };
            let entries = classes
                .iter()
                .map(ClassEntry::new)
                .collect::<Result<Vec<_>, _>>()?;
            write_entries(&mut out, format, &entries)
        }
        Command::Properties { input, format } => {
            let model = load_model(spec, &input, &manager)?;
            let entries = model
                .list_all_ont_properties()?
                .iter()
                .map(PropertyEntry::new)
                .collect::<Result<Vec<_>, _>>()?;
            write_entries(&mut out, format, &entries)
        }
        Command::Individuals { input, format } => {
            let model = load_model(spec, &input, &manager)?;
            let entries = model
                .list_individuals()?
                .iter()
                .map(|i| {
                    Ok(IndividualEntry {
                        id: i.to_string(),
                        classes: ids(i.list_ont_classes(true)?),
                    })
                })
                .collect::<Result<Vec<_>, OntError>>()?;
            write_entries(&mut out, format, &entries)
        }
        Command::Lists { input } => {
            let model = load_model(spec, &input, &manager)?;
            let mut invalid = 0;
            for list in model.list_lists()? {
                let id = list.node();
                match list.check_valid() {
                    Ok(()) => writeln!(out, "{id}\tvalid\t{}", list.len()?)?,
                    Err(OntError::List(error)) => {
                        invalid += 1;
                        writeln!(out, "{id}\tinvalid\t{error}")?;
                    }
                    Err(error) => return Err(error.into()),
                }
            }
            if invalid > 0 {
                bail!("{invalid} malformed list(s) found");
            }
            Ok(())
        }
        Command::Imports { input, format } => {
            let model = load_model(spec, &input, &manager)?;
            model.load_imports(&manager)?;
            let loaded = model.list_sub_graph_names()?;
            let mut entries = model
                .list_loaded_imports()?
                .into_iter()
                .map(|uri| ImportEntry {
                    loaded: loaded.contains(&uri),
                    location: manager.do_alt_url_mapping(&uri).to_owned(),
                    uri,
                })
                .collect::<Vec<_>>();
            entries.sort_by(|a, b| a.uri.cmp(&b.uri));
            write_entries(&mut out, format, &entries)
        }
        Command::Results {
            file,
            results_format,
        } => {
            let format = if let Some(format) = results_format {
                results_format_from_name(&format)?
            } else {
                format_from_path(&file, |ext| {
                    ResultsFormat::from_extension(ext)
                        .with_context(|| format!("The file extension '{ext}' is unknown"))
                })?
            };
            let reader = BufReader::new(
                File::open(&file).with_context(|| format!("Failed to open {}", file.display()))?,
            );
            match read_results(reader, format)? {
                QueryResult::Boolean(value) => writeln!(out, "{value}")?,
                QueryResult::Solutions(table) => {
                    let header = table
                        .variables()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>();
                    writeln!(out, "{}", header.join("\t"))?;
                    for row in table.rows() {
                        let values = row
                            .iter()
                            .map(|v| v.as_ref().map(ToString::to_string).unwrap_or_default())
                            .collect::<Vec<_>>();
                        writeln!(out, "{}", values.join("\t"))?;
                    }
                }
            }
            Ok(())
        }
    }
}

fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn language(language: Language) -> OntLanguage {
    match language {
        Language::Owl => OntLanguage::Owl,
        Language::OwlDl => OntLanguage::OwlDl,
        Language::OwlLite => OntLanguage::OwlLite,
        Language::Daml => OntLanguage::DamlOil,
        Language::Rdfs => OntLanguage::Rdfs,
    }
}

fn load_model(
    spec: OntModelSpec,
    input: &Input,
    manager: &OntDocumentManager,
) -> anyhow::Result<OntModel> {
    let format = if let Some(format) = &input.input_format {
        rdf_format_from_name(format)?
    } else {
        format_from_path(&input.file, rdf_format_from_extension)?
    };
    let file = File::open(&input.file)
        .with_context(|| format!("Failed to open {}", input.file.display()))?;
    let model = OntModel::new(spec);
    model
        .load_from_reader(BufReader::new(file), format, input.base.as_deref())
        .with_context(|| format!("Failed to parse {}", input.file.display()))?;
    info!(file = %input.file.display(), triples = model.len()?, "document loaded");
    if input.with_imports {
        model.load_imports(manager)?;
    }
    Ok(model)
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_extension(ext: &str) -> anyhow::Result<RdfFormat> {
    if ext.eq_ignore_ascii_case("owl") || ext.eq_ignore_ascii_case("daml") {
        return Ok(RdfFormat::RdfXml);
    }
    RdfFormat::from_extension(ext).with_context(|| format!("The file extension '{ext}' is unknown"))
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Ok(format) = rdf_format_from_extension(name) {
        return Ok(format);
    }
    if let Some(format) = RdfFormat::from_media_type(name) {
        return Ok(format);
    }
    bail!("The file format '{name}' is unknown")
}

fn results_format_from_name(name: &str) -> anyhow::Result<ResultsFormat> {
    if let Some(format) = ResultsFormat::from_extension(name) {
        return Ok(format);
    }
    if let Some(format) = ResultsFormat::from_media_type(name) {
        return Ok(format);
    }
    bail!("The query results format '{name}' is unknown")
}

fn ids<T: Into<OntResource>>(resources: impl IntoIterator<Item = T>) -> Vec<String> {
    resources
        .into_iter()
        .map(|r| r.into().to_string())
        .collect()
}

/// An output line in text mode, an array element in JSON mode.
trait Entry: Serialize {
    fn write_text(&self, out: &mut impl Write) -> io::Result<()>;
}

fn write_entries<E: Entry>(
    out: &mut impl Write,
    format: OutputFormat,
    entries: &[E],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                entry.write_text(out)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ClassEntry {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    super_classes: Vec<String>,
}

impl ClassEntry {
    fn new(class: &OntClass) -> Result<Self, OntError> {
        Ok(Self {
            id: class.to_string(),
            label: class.label(None)?,
            super_classes: ids(class.list_super_classes(true)?),
        })
    }
}

impl Entry for ClassEntry {
    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        match &self.label {
            Some(label) => writeln!(out, "{}\t{label}", self.id),
            None => writeln!(out, "{}", self.id),
        }
    }
}

#[derive(Serialize)]
struct PropertyEntry {
    id: String,
    kind: &'static str,
    domain: Vec<String>,
    range: Vec<String>,
}

impl PropertyEntry {
    fn new(property: &OntProperty) -> Result<Self, OntError> {
        let kind = if property.is_object_property()? {
            "object"
        } else if property.is_datatype_property()? {
            "datatype"
        } else if property.is_annotation_property()? {
            "annotation"
        } else {
            "property"
        };
        Ok(Self {
            id: property.to_string(),
            kind,
            domain: ids(property.list_domain()?),
            range: ids(property.list_range()?),
        })
    }
}

impl Entry for PropertyEntry {
    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            self.id,
            self.kind,
            self.domain.join(" "),
            self.range.join(" ")
        )
    }
}

#[derive(Serialize)]
struct IndividualEntry {
    id: String,
    classes: Vec<String>,
}

impl Entry for IndividualEntry {
    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}\t{}", self.id, self.classes.join(" "))
    }
}

#[derive(Serialize)]
struct ImportEntry {
    uri: String,
    location: String,
    loaded: bool,
}

impl Entry for ImportEntry {
    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let status = if self.loaded { "loaded" } else { "unreadable" };
        writeln!(out, "{}\t{status}\t{}", self.uri, self.location)
    }
}
