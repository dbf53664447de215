#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxont::tools::{find_shortest_path, named_hierarchy_roots, on_predicates};
use oxont::vocab::{daml_oil, owl, rdf, rdfs};
use oxont::{OntDocumentManager, OntError, OntModel, OntModelSpec};
use oxrdf::{NamedNodeRef, TripleRef};
use oxrdfio::RdfFormat;
use std::error::Error;
use std::fs;
use tempfile::TempDir;

const PIZZA: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix : <http://example.com/pizza#> .

<http://example.com/pizza> a owl:Ontology ;
    owl:versionInfo "1.0" .

:Food a owl:Class .
:Pizza a owl:Class ;
    rdfs:subClassOf :Food ;
    rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :hasTopping ; owl:someValuesFrom :Topping ] .
:Topping a owl:Class ; rdfs:subClassOf :Food .
:Cheese a owl:Class ; rdfs:subClassOf :Topping .
:Tomato a owl:Class ; rdfs:subClassOf :Topping .
:Spicy a owl:Class ;
    owl:unionOf ( :Pepper :Chili ) .
:Pepper a owl:Class .
:Chili a owl:Class .

:hasTopping a owl:ObjectProperty ;
    rdfs:domain :Pizza ;
    rdfs:range :Topping .
:isToppingOf a owl:ObjectProperty ;
    owl:inverseOf :hasTopping .
:hasCalories a owl:DatatypeProperty , owl:FunctionalProperty ;
    rdfs:domain :Food ;
    rdfs:range xsd:integer .

:margherita a :Pizza ;
    :hasTopping :mozzarella , :tomato .
:mozzarella a :Cheese .
:tomato a :Tomato .
"#;

fn pizza(name: &str) -> String {
    format!("http://example.com/pizza#{name}")
}

fn load(spec: OntModelSpec, data: &str) -> Result<OntModel, OntError> {
    let model = OntModel::new(spec);
    model.load_from_reader(data.as_bytes(), RdfFormat::Turtle, None)?;
    Ok(model)
}

#[test]
fn classes_of_a_loaded_document() -> Result<(), Box<dyn Error>> {
    let model = load(OntModelSpec::OWL_MEM, PIZZA)?;
    assert_eq!(model.list_named_classes()?.len(), 8);
    assert_eq!(model.list_restrictions()?.len(), 1);

    let food = model.get_ont_class(&pizza("Food"))?.ok_or("no Food")?;
    let pizza_class = model.get_ont_class(&pizza("Pizza"))?.ok_or("no Pizza")?;
    let cheese = model.get_ont_class(&pizza("Cheese"))?.ok_or("no Cheese")?;
    assert!(cheese.has_super_class(&food, false)?);
    assert!(!cheese.has_super_class(&food, true)?);
    assert_eq!(food.list_sub_classes(true)?.len(), 2);

    let restriction = pizza_class
        .list_super_classes(true)?
        .into_iter()
        .find(|c| c.is_anon())
        .ok_or("no restriction")?
        .as_restriction()?;
    let on = restriction.on_property()?.ok_or("no property")?;
    assert_eq!(on.iri(), Some(pizza("hasTopping").as_str()));
    let some = restriction.as_some_values_from_restriction()?;
    assert_eq!(
        some.some_values_from()?.and_then(|c| c.iri().map(str::to_owned)),
        Some(pizza("Topping"))
    );

    let spicy = model
        .get_ont_class(&pizza("Spicy"))?
        .ok_or("no Spicy")?
        .as_union_class()?;
    let operands = spicy
        .list_operands()?
        .into_iter()
        .filter_map(|c| c.iri().map(str::to_owned))
        .collect::<Vec<_>>();
    assert_eq!(operands, vec![pizza("Pepper"), pizza("Chili")]);
    Ok(())
}

#[test]
fn properties_of_a_loaded_document() -> Result<(), Box<dyn Error>> {
    let model = load(OntModelSpec::OWL_MEM, PIZZA)?;
    assert_eq!(model.list_object_properties()?.len(), 2);
    assert_eq!(model.list_datatype_properties()?.len(), 1);
    assert_eq!(model.list_functional_properties()?.len(), 1);

    let has_topping = model
        .get_object_property(&pizza("hasTopping"))?
        .ok_or("no hasTopping")?;
    let is_topping_of = model
        .get_object_property(&pizza("isToppingOf"))?
        .ok_or("no isToppingOf")?;
    assert_eq!(has_topping.inverse()?, Some((*is_topping_of).clone()));
    assert_eq!(has_topping.list_referring_restrictions()?.len(), 1);

    let calories = model
        .get_datatype_property(&pizza("hasCalories"))?
        .ok_or("no hasCalories")?;
    assert!(calories.is_functional_property()?);
    assert_eq!(
        calories.range()?.and_then(|r| r.iri().map(str::to_owned)),
        Some("http://www.w3.org/2001/XMLSchema#integer".to_owned())
    );
    let declaring = calories
        .list_declaring_classes(true)?
        .into_iter()
        .filter_map(|c| c.iri().map(str::to_owned))
        .collect::<Vec<_>>();
    assert_eq!(declaring, vec![pizza("Food")]);

    let pizza_class = model.get_ont_class(&pizza("Pizza"))?.ok_or("no Pizza")?;
    assert!(pizza_class.has_declared_property(&has_topping, true)?);
    assert!(pizza_class.has_declared_property(&calories, false)?);
    Ok(())
}

#[test]
fn individuals_of_a_loaded_document() -> Result<(), Box<dyn Error>> {
    let model = load(OntModelSpec::OWL_MEM, PIZZA)?;
    assert_eq!(model.list_individuals()?.len(), 3);
    let margherita = model
        .get_individual(&pizza("margherita"))?
        .ok_or("no margherita")?;
    let topping = model.get_ont_class(&pizza("Topping"))?.ok_or("no Topping")?;
    let cheese = model.get_ont_class(&pizza("Cheese"))?.ok_or("no Cheese")?;
    assert_eq!(topping.list_instances(true)?.len(), 0);
    assert_eq!(cheese.list_instances(true)?.len(), 1);
    assert!(margherita.has_ont_class(
        &model.get_ont_class(&pizza("Pizza"))?.ok_or("no Pizza")?,
        true
    )?);
    assert_eq!(
        margherita
            .list_property_values(NamedNodeRef::new(&pizza("hasTopping"))?)?
            .len(),
        2
    );

    let ontology = model
        .get_ontology("http://example.com/pizza")?
        .ok_or("no ontology")?;
    assert_eq!(ontology.version_info()?.as_deref(), Some("1.0"));
    Ok(())
}

#[test]
fn language_profiles_shape_the_vocabulary() -> Result<(), Box<dyn Error>> {
    let daml = OntModel::new(OntModelSpec::DAML_MEM);
    let class = daml.create_class(Some("http://example.com/C"))?;
    assert!(daml.contains(TripleRef::new(class.node().as_ref(), rdf::TYPE, daml_oil::CLASS))?);
    assert!(!daml.contains(TripleRef::new(class.node().as_ref(), rdf::TYPE, owl::CLASS))?);

    let rdfs_model = OntModel::new(OntModelSpec::RDFS_MEM);
    let class = rdfs_model.create_class(Some("http://example.com/C"))?;
    assert!(rdfs_model.contains(TripleRef::new(class.node().as_ref(), rdf::TYPE, rdfs::CLASS))?);
    let property = rdfs_model.create_ont_property("http://example.com/p")?;
    assert!(matches!(
        rdfs_model.create_restriction(None, Some(&property)),
        Err(OntError::Profile(_))
    ));

    // OWL data read through the RDFS profile only shows RDFS classes.
    let model = load(OntModelSpec::RDFS_MEM, PIZZA)?;
    assert!(model.list_classes()?.is_empty());
    Ok(())
}

#[test]
fn broken_lists_are_reported() -> Result<(), Box<dyn Error>> {
    let model = load(
        OntModelSpec::OWL_MEM,
        r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        <http://example.com/U> a owl:Class ; owl:unionOf _:l .
        _:l rdf:first <http://example.com/A> .
        "#,
    )?;
    let union = model
        .get_ont_class("http://example.com/U")?
        .ok_or("no U")?
        .as_union_class()?;
    let operands = union.operands()?.ok_or("no operands")?;
    assert!(!operands.is_valid()?);
    assert!(operands.check_valid().is_err());
    Ok(())
}

#[test]
fn import_closure() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let a = dir.path().join("a.ttl");
    let b = dir.path().join("b.ttl");
    fs::write(
        &a,
        r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        <http://example.com/a> a owl:Ontology ; owl:imports <http://example.com/b> .
        <http://example.com/A> a owl:Class .
        "#,
    )?;
    fs::write(
        &b,
        r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        <http://example.com/b> a owl:Ontology .
        <http://example.com/B> a owl:Class ; rdfs:subClassOf <http://example.com/A> .
        "#,
    )?;
    let mut manager = OntDocumentManager::new();
    manager.add_alt_entry("http://example.com/a", &format!("file://{}", a.display()));
    manager.add_alt_entry("http://example.com/b", &format!("file://{}", b.display()));

    let model = load(
        OntModelSpec::OWL_MEM,
        r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        <http://example.com/main> a owl:Ontology ; owl:imports <http://example.com/a> .
        "#,
    )?;
    model.load_imports(&manager)?;
    assert_eq!(model.count_sub_graphs()?, 2);
    let mut loaded = model.list_loaded_imports()?;
    loaded.sort();
    assert_eq!(loaded, vec!["http://example.com/a", "http://example.com/b"]);

    let imported = model.get_ont_class("http://example.com/B")?.ok_or("no B")?;
    assert_eq!(
        imported.super_class()?.and_then(|c| c.iri().map(str::to_owned)),
        Some("http://example.com/A".to_owned())
    );
    assert!(!model.is_in_base_model(TripleRef::new(
        imported.node().as_ref(),
        rdf::TYPE,
        owl::CLASS
    ))?);

    let roots = named_hierarchy_roots(&model)?
        .into_iter()
        .filter_map(|c| c.iri().map(str::to_owned))
        .collect::<Vec<_>>();
    assert_eq!(roots, vec!["http://example.com/A".to_owned()]);
    Ok(())
}

#[test]
fn paths_between_individuals() -> Result<(), Box<dyn Error>> {
    let model = load(OntModelSpec::OWL_MEM, PIZZA)?;
    let margherita = model
        .get_individual(&pizza("margherita"))?
        .ok_or("no margherita")?;
    let cheese = pizza("Cheese");
    let cheese = NamedNodeRef::new(&cheese)?;
    let has_topping = pizza("hasTopping");
    let has_topping = NamedNodeRef::new(&has_topping)?;
    let path = find_shortest_path(
        &model,
        &margherita,
        cheese,
        on_predicates(&[has_topping, rdf::TYPE]),
    )?
    .ok_or("no path")?;
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].predicate, has_topping);
    assert_eq!(path[1].predicate, rdf::TYPE);
    Ok(())
}
