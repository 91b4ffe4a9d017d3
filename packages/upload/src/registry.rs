use crate::config::{UploadFormConfig, UploadTarget};
use crate::effects::UploadEffects;
use crate::error::UploadError;
use crate::transport::UploadTransport;
use crate::widget::UploadWidget;

/// The active upload widgets of one page, one per configured slot.
///
/// This is the only page-wide upload state. Dropping it (on navigation)
/// tears every slot down.
pub struct WidgetRegistry<T, E> {
    widgets: Vec<UploadWidget<T, E>>,
}

impl<T, E> WidgetRegistry<T, E>
where
    T: UploadTransport + Clone,
    E: UploadEffects,
{
    /// Validates `config` and builds a widget for each slot.
    ///
    /// `effects_for` is called once per slot, in configuration order.
    pub fn init<F>(config: &UploadFormConfig, transport: T, mut effects_for: F) -> Result<Self, UploadError>
    where
        F: FnMut(&UploadTarget) -> E,
    {
        let targets = config.targets()?;
        let widgets: Vec<_> = targets
            .into_iter()
            .map(|target| {
                let effects = effects_for(&target);
                UploadWidget::new(target, transport.clone(), effects)
            })
            .collect();

        tracing::info!(
            "direct upload ready: slots=[{}]",
            widgets.iter().map(|w| w.slot()).collect::<Vec<_>>().join(", ")
        );
        Ok(Self { widgets })
    }
}

impl<T, E> WidgetRegistry<T, E> {
    pub fn get(&self, slot: &str) -> Option<&UploadWidget<T, E>> {
        self.widgets.iter().find(|w| w.target().name == slot)
    }

    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.widgets.iter().map(|w| w.target().name.as_str())
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl<T, E> Drop for WidgetRegistry<T, E> {
    fn drop(&mut self) {
        if !self.widgets.is_empty() {
            tracing::debug!("tearing down {} upload slot(s)", self.widgets.len());
        }
    }
}
