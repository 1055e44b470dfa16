use std::collections::HashMap;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use uuid::Uuid;
use vitrine_core::model::{Collection, DiscoveryConfiguration, Item};
use vitrine_core::registry::{ConfigurationRegistry, PropertySource};
use vitrine_core::resolver::ConfigurationResolver;

struct BenchRegistry {
    configurations: HashMap<String, DiscoveryConfiguration>,
}

impl ConfigurationRegistry for BenchRegistry {
    fn configuration(&self, name: &str) -> Option<DiscoveryConfiguration> {
        self.configurations.get(name).cloned()
    }

    fn default_configuration(&self) -> DiscoveryConfiguration {
        DiscoveryConfiguration::named("default")
    }

    fn ignored_metadata_fields(&self, _object_type: i32) -> Vec<String> {
        Vec::new()
    }
}

struct BenchProperties;

impl PropertySource for BenchProperties {
    fn property(&self, module: &str, key: &str) -> Option<String> {
        (module == "cris" && key == "facet.type.Publication")
            .then(|| "publication###publications".to_string())
    }
}

fn benchmark_cascade_over_100_collections(c: &mut Criterion) {
    let mut configurations = HashMap::new();
    for name in ["dspacebasic", "publications", "dspacePublication", "global"] {
        configurations.insert(name.to_string(), DiscoveryConfiguration::named(name));
    }
    // every tenth collection carries its own configuration
    for i in (0..100).step_by(10) {
        let handle = format!("123456789/{i}");
        configurations.insert(handle.clone(), DiscoveryConfiguration::named(handle));
    }

    let resolver = ConfigurationResolver::new(
        Arc::new(BenchRegistry { configurations }),
        Arc::new(BenchProperties),
    );

    let collections: Vec<Collection> = (0..100)
        .map(|i| Collection {
            uuid: Uuid::nil(),
            handle: format!("123456789/{i}"),
            name: format!("Collection {i}"),
        })
        .collect();
    let item = Item {
        uuid: Uuid::nil(),
        handle: "123456789/7".to_string(),
        name: "Bench item".to_string(),
        type_label: "Publication".to_string(),
        collections,
        metadata: vec![],
    };

    c.bench_function("cascade_100_collections", |b| {
        b.iter(|| {
            let outcome = resolver.item_configurations(&item).unwrap();
            assert!(!outcome.configurations.is_empty());
            outcome
        })
    });
}

criterion_group!(benches, benchmark_cascade_over_100_collections);
criterion_main!(benches);
