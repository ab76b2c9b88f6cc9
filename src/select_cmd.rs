use ajo::{
    Autojump, EditorOpener, FlowOutcome, Opener, PrintOpener, SelectionFlow, Settings, TermPicker,
};
use std::error::Error;
use std::io;

pub fn run_jump(settings: &Settings) -> Result<(), Box<dyn Error>> {
    run(settings, |flow| flow.run_jump())
}

pub fn run_recent(settings: &Settings) -> Result<(), Box<dyn Error>> {
    run(settings, |flow| flow.run_recent())
}

fn run<F>(settings: &Settings, step: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut SelectionFlow<'_>) -> Result<FlowOutcome, ajo::FlowError>,
{
    let source = Autojump::new(&settings.autojump_bin);
    let store = ajo::recent_store()?;
    let mut picker = TermPicker::stdio(!settings.no_color);
    let mut opener = make_opener(settings)?;

    let mut flow = SelectionFlow::new(settings, &source, &store, &mut picker, opener.as_mut());
    match step(&mut flow)? {
        FlowOutcome::Opened(path) => log::info!("opened {}", path.display()),
        FlowOutcome::Cancelled => log::debug!("selection cancelled"),
    }

    Ok(())
}

fn make_opener(settings: &Settings) -> Result<Box<dyn Opener>, Box<dyn Error>> {
    match settings.editor.as_deref() {
        Some(command) => {
            let opener = EditorOpener::new(command)
                .ok_or_else(|| format!("Invalid editor command: {:?}", command))?;
            Ok(Box::new(opener))
        }
        None => Ok(Box::new(PrintOpener::new(io::stdout()))),
    }
}
