use std::{
    sync::Arc,
    thread,
};

use merkki_log::*;

trait View {

    fn mount(&mut self, logger: &dyn LogProvider);

    fn children(&mut self) -> &mut [Box<dyn View>] {
        &mut []
    }
}

struct Row {
    title: &'static str,
}

impl View for Row {

    fn mount(&mut self, logger: &dyn LogProvider) {
        mount!(logger => "row {}", self.title);
    }
}

struct ContentView {
    rows: Vec<Box<dyn View>>,
}

impl ContentView {

    fn new(logger: &dyn LogProvider) -> Self {
        let titles = tap!(logger => ["first", "second", "third"]);
        Self {
            rows: titles
                .into_iter()
                .map(|title| Box::new(Row { title }) as Box<dyn View>)
                .collect(),
        }
    }
}

impl View for ContentView {

    fn mount(&mut self, logger: &dyn LogProvider) {
        mount!(logger => "ContentView with {} rows", self.rows.len());
    }

    fn children(&mut self) -> &mut [Box<dyn View>] {
        &mut self.rows
    }
}

fn mount_tree(view: &mut dyn View, logger: &dyn LogProvider) {
    view.mount(logger);
    for child in view.children() {
        mount_tree(child.as_mut(), logger);
    }
}

fn main() {
    let config = LogConfig::from_env();
    let logger: Arc<dyn LogProvider> = match Logger::new(config) {
        Ok(logger) => Arc::new(logger),
        Err(err) => {
            eprintln!("falling back to silent logging: {}", err);
            Arc::new(NoopLogger)
        },
    };
    let _guard = match init(logger.clone()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", err);
            guard()
        },
    };

    let startup = thread::spawn(|| {
        info!("Awesome");
    });

    let mut root = ContentView::new(&*logger);
    mount_tree(&mut root, &*logger);

    warning!(logger => "threshold is {}", logger.threshold());
    if startup.join().is_err() {
        error!(logger => "startup task panicked");
    }
}
