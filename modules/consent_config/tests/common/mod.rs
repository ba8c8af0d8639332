//! Common test utilities and shared settings documents

#![allow(dead_code)]

/// LDAP-backed deployment with a handful of overridden settings
pub const LDAP_YAML: &str = r#"
cas:
  consent:
    reminder: 12
    reminder-time-unit: hours
    ldap:
      ldap-url: ldaps://ldap.example.org:636
      base-dn: ou=people,dc=example,dc=org
      search-filter: uid={user}
      type: AD
      consent-attribute-name: consentDecision
      max-pool-size: 20
      connect-timeout: 10s
    crypto:
      signing:
        key-size: 256
"#;

/// Two backends at once
pub const AMBIGUOUS_YAML: &str = r#"
cas:
  consent:
    rest:
      endpoint: https://consent.example.org/api
    mongo:
      host: mongo.example.org
"#;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}
