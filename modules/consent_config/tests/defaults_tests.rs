//! Default values and accessor behavior of consent settings

use consent_config::model::backends::{
    DEFAULT_CONSENT_ATTRIBUTE_NAME, DEFAULT_COUCHDB_NAME, DEFAULT_MONGO_COLLECTION,
};
use consent_config::model::crypto::{
    DEFAULT_STRINGABLE_ENCRYPTION_KEY_SIZE, DEFAULT_STRINGABLE_SIGNING_KEY_SIZE,
};
use consent_config::{
    ConsentProperties, CouchDb, Ldap, LdapType, MongoDb, Rest, TimeUnit, WebflowProperties,
};
use std::time::Duration;

mod common;
use common::print_test_header;

#[test]
fn test_documented_defaults() {
    print_test_header(
        "test_documented_defaults",
        &["Verify the defaults every deployment starts from."],
    );
    let props = ConsentProperties::default();

    assert_eq!(props.reminder, 30);
    assert_eq!(props.reminder_time_unit, TimeUnit::Days);
    assert_eq!(props.couch_db.db_name, "consent");
    assert_eq!(props.mongo.collection, "MongoDbCasConsentRepository");
    assert_eq!(props.ldap.consent_attribute_name, "casConsentDecision");

    assert_eq!(DEFAULT_CONSENT_ATTRIBUTE_NAME, "casConsentDecision");
    assert_eq!(DEFAULT_MONGO_COLLECTION, "MongoDbCasConsentRepository");
    assert_eq!(DEFAULT_COUCHDB_NAME, "consent");
}

#[test]
fn test_crypto_and_webflow_defaults() {
    let props = ConsentProperties::default();

    assert!(props.crypto.enabled);
    assert_eq!(props.crypto.encryption.key_size, DEFAULT_STRINGABLE_ENCRYPTION_KEY_SIZE);
    assert_eq!(props.crypto.signing.key_size, DEFAULT_STRINGABLE_SIGNING_KEY_SIZE);
    assert!(props.crypto.encryption.key.is_empty());
    assert_eq!(props.crypto.alg, "A128CBC-HS256");
    assert_eq!(props.webflow, WebflowProperties::with_order(100));
}

#[test]
fn test_backend_groups_construct_independently() {
    assert_eq!(Rest::default().endpoint, None);
    assert_eq!(Ldap::default().ldap_type, LdapType::Generic);
    assert_eq!(MongoDb::default().port, 27017);
    assert_eq!(CouchDb::default().socket_timeout, Duration::from_secs(10));
    assert!(ConsentProperties::default().redis.host.is_none());
    assert_eq!(ConsentProperties::default().redis.port, 6379);
    assert_eq!(ConsentProperties::default().jpa.pool.max_size, 18);
}

#[test]
fn test_set_then_read_back() {
    print_test_header(
        "test_set_then_read_back",
        &["Every field returns what was last written to it."],
    );
    let mut props = ConsentProperties::default();

    props.reminder = 90;
    props.reminder_time_unit = TimeUnit::Minutes;
    props.rest.endpoint = Some("https://consent.example.org".to_string());
    props.ldap.ldap_type = LdapType::EDirectory;
    props.ldap.consent_attribute_name = "consent".to_string();
    props.ldap.base_dn = Some("dc=example,dc=org".to_string());
    props.jpa.url = Some("jdbc:postgresql://db/cas".to_string());
    props.json.location = Some("file:/etc/cas/consent.json".to_string());
    props.groovy.location = Some("file:/etc/cas/consent.groovy".to_string());
    props.redis.database = 3;
    props.mongo.collection = "Consent".to_string();
    props.couch_db.db_name = "decisions".to_string();
    props.crypto.signing.key_size = 1024;
    props.webflow.order = 5;

    assert_eq!(props.reminder, 90);
    assert_eq!(props.reminder_time_unit, TimeUnit::Minutes);
    assert_eq!(props.rest.endpoint.as_deref(), Some("https://consent.example.org"));
    assert_eq!(props.ldap.ldap_type, LdapType::EDirectory);
    assert_eq!(props.ldap.consent_attribute_name, "consent");
    assert_eq!(props.ldap.base_dn.as_deref(), Some("dc=example,dc=org"));
    assert_eq!(props.jpa.url.as_deref(), Some("jdbc:postgresql://db/cas"));
    assert_eq!(props.json.location.as_deref(), Some("file:/etc/cas/consent.json"));
    assert_eq!(props.groovy.location.as_deref(), Some("file:/etc/cas/consent.groovy"));
    assert_eq!(props.redis.database, 3);
    assert_eq!(props.mongo.collection, "Consent");
    assert_eq!(props.couch_db.db_name, "decisions");
    assert_eq!(props.crypto.signing.key_size, 1024);
    assert_eq!(props.webflow.order, 5);
}

#[test]
fn test_chained_setters() {
    let props = ConsentProperties::default()
        .with_reminder(6)
        .with_reminder_time_unit(TimeUnit::Months)
        .with_rest(Rest::default().with_endpoint("https://consent.example.org"))
        .with_ldap(Ldap::default().with_type(LdapType::FreeIpa).with_consent_attribute_name("x"))
        .with_mongo(MongoDb::default().with_collection("c"))
        .with_couch_db(CouchDb::default().with_db_name("d"));

    assert_eq!(props.reminder, 6);
    assert_eq!(props.reminder_time_unit, TimeUnit::Months);
    assert_eq!(props.rest.endpoint.as_deref(), Some("https://consent.example.org"));
    assert_eq!(props.ldap.ldap_type, LdapType::FreeIpa);
    assert_eq!(props.ldap.consent_attribute_name, "x");
    assert_eq!(props.mongo.collection, "c");
    assert_eq!(props.couch_db.db_name, "d");
}

#[test]
fn test_fresh_instances_are_independent() {
    print_test_header(
        "test_fresh_instances_are_independent",
        &["Two instances start equal and share no mutable state."],
    );
    let first = ConsentProperties::default();
    let mut second = ConsentProperties::default();
    assert_eq!(first, second);

    second.reminder = 1;
    second.mongo.collection = "Other".to_string();
    second.crypto.encryption.key = "abc".to_string();

    assert_eq!(first.reminder, 30);
    assert_eq!(first.mongo.collection, "MongoDbCasConsentRepository");
    assert!(first.crypto.encryption.key.is_empty());
    assert_ne!(first, second);
}

#[test]
fn test_serialized_document_binds_back() {
    let mut props = ConsentProperties::default().with_reminder(14);
    props.couch_db.url = Some("http://couch.example.org:5984".to_string());
    props.ldap.connection.idle_time = Duration::from_secs(90);

    let yaml = serde_yaml::to_string(&props).unwrap();
    let bound: ConsentProperties = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(bound, props);
}
