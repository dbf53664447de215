#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use anyhow::Result;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

const ZOO: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix : <http://example.com/zoo#> .

:Animal a owl:Class ; rdfs:label "animal" .
:Dog a owl:Class ; rdfs:subClassOf :Animal .
:Cat a owl:Class ; rdfs:subClassOf :Animal .
:Pet a owl:Class ; owl:unionOf ( :Dog :Cat ) .
:eats a owl:ObjectProperty ; rdfs:domain :Animal .
:name a owl:DatatypeProperty .
:rex a :Dog .
"#;

fn cli_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oxont"))
}

fn zoo_file(dir: &TempDir) -> Result<assert_fs::fixture::ChildPath> {
    let file = dir.child("zoo.ttl");
    file.write_str(ZOO)?;
    Ok(file)
}

#[test]
fn cli_help() {
    cli_command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("Oxont"));
}

#[test]
fn cli_classes() -> Result<()> {
    let dir = TempDir::new()?;
    let file = zoo_file(&dir)?;
    cli_command()
        .arg("classes")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<http://example.com/zoo#Animal>\tanimal\n")
                .and(predicate::str::contains("<http://example.com/zoo#Dog>\n"))
                .and(predicate::str::contains("<http://example.com/zoo#Pet>\n")),
        );
    Ok(())
}

#[test]
fn cli_root_classes_as_json() -> Result<()> {
    let dir = TempDir::new()?;
    let file = zoo_file(&dir)?;
    let output = cli_command()
        .arg("classes")
        .arg("--roots")
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let roots: serde_json::Value = serde_json::from_slice(&output)?;
    let mut ids = roots
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|c| c["id"].as_str())
        .collect::<Vec<_>>();
    ids.sort_unstable();
    assert_eq!(
        ids,
        ["<http://example.com/zoo#Animal>", "<http://example.com/zoo#Pet>"]
    );
    Ok(())
}

#[test]
fn cli_properties_and_individuals() -> Result<()> {
    let dir = TempDir::new()?;
    let file = zoo_file(&dir)?;
    cli_command()
        .arg("properties")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "<http://example.com/zoo#eats>\tobject\t<http://example.com/zoo#Animal>\t\n",
            )
            .and(predicate::str::contains(
                "<http://example.com/zoo#name>\tdatatype",
            )),
        );
    cli_command()
        .arg("individuals")
        .arg(file.path())
        .assert()
        .success()
        .stdout("<http://example.com/zoo#rex>\t<http://example.com/zoo#Dog>\n");
    Ok(())
}

#[test]
fn cli_rdfs_language_hides_owl_classes() -> Result<()> {
    let dir = TempDir::new()?;
    let file = zoo_file(&dir)?;
    cli_command()
        .arg("--language")
        .arg("rdfs")
        .arg("classes")
        .arg(file.path())
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn cli_lists() -> Result<()> {
    let dir = TempDir::new()?;
    let file = zoo_file(&dir)?;
    cli_command()
        .arg("lists")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\tvalid\t2\n"));

    let broken = dir.child("broken.nt");
    broken.write_str(
        "_:l <http://www.w3.org/1999/02/22-rdf-syntax-ns#first> <http://example.com/a> .\n",
    )?;
    cli_command()
        .arg("lists")
        .arg(broken.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\tinvalid\t"))
        .stderr(predicate::str::contains("1 malformed list(s) found"));
    Ok(())
}

#[test]
fn cli_imports_with_policy() -> Result<()> {
    let dir = TempDir::new()?;
    let imported = dir.child("animals.ttl");
    imported.write_str(
        "<http://example.com/animals> a <http://www.w3.org/2002/07/owl#Ontology> .\n<http://example.com/Animal> a <http://www.w3.org/2002/07/owl#Class> .\n",
    )?;
    let main = dir.child("main.ttl");
    main.write_str(
        "<http://example.com/main> a <http://www.w3.org/2002/07/owl#Ontology> ; <http://www.w3.org/2002/07/owl#imports> <http://example.com/animals> , <http://example.com/missing> .\n",
    )?;
    let policy = dir.child("policy.ttl");
    policy.write_str(&format!(
        "@prefix om: <http://jena.hpl.hp.com/schemas/2003/03/ont-manager#> .\n[] a om:OntologySpec ; om:publicURI <http://example.com/animals> ; om:altURL <file://{}> .\n",
        imported.path().display()
    ))?;

    cli_command()
        .arg("imports")
        .arg("--policy")
        .arg(policy.path())
        .arg(main.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("http://example.com/animals\tloaded\tfile://")
                .and(predicate::str::contains(
                    "http://example.com/missing\tunreadable\thttp://example.com/missing",
                )),
        );

    cli_command()
        .arg("classes")
        .arg("--with-imports")
        .arg("--policy")
        .arg(policy.path())
        .arg(main.path())
        .assert()
        .success()
        .stdout("<http://example.com/Animal>\n");
    Ok(())
}

#[test]
fn cli_results() -> Result<()> {
    let dir = TempDir::new()?;
    let json = dir.child("results.srj");
    json.write_str(
        r#"{"head":{"vars":["s","o"]},"results":{"bindings":[{"s":{"type":"uri","value":"http://example.com/s"}}]}}"#,
    )?;
    cli_command()
        .arg("results")
        .arg(json.path())
        .assert()
        .success()
        .stdout("?s\t?o\n<http://example.com/s>\t\n");

    let empty = dir.child("empty.tsv");
    empty.write_str("?s\n")?;
    cli_command()
        .arg("results")
        .arg(empty.path())
        .assert()
        .success()
        .stdout("?s\n");

    let csv = dir.child("results.csv");
    csv.write_str("s\nhttp://example.com/s\n")?;
    cli_command()
        .arg("results")
        .arg(csv.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV"));
    Ok(())
}

#[test]
fn cli_json_logs() -> Result<()> {
    let dir = TempDir::new()?;
    let file = zoo_file(&dir)?;
    cli_command()
        .env("RUST_LOG", "info")
        .arg("--log-format")
        .arg("json")
        .arg("classes")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("\"document loaded\""));
    Ok(())
}
