//! Effect subslots: which effect is selected, and where its parameters live.

use eastlight_rc0::ElementKind;
use eastlight_schema::{FX_TYPE_TAG, FxChain, SWITCH_TAG, Subslot};

use crate::change::FieldChange;
use crate::error::ModelError;
use crate::model::Model;
use crate::section::{ResolvedSection, ResolvedSectionMut};

/// The effect currently selected in one subslot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEffect {
    /// Chain holding the subslot.
    pub chain: FxChain,
    /// Subslot address.
    pub subslot: Subslot,
    /// Effect-type index stored in the subslot header.
    pub index: i64,
    /// Effect name from the chain's table.
    pub name: String,
    /// Section holding the effect's parameters (`AA_DELAY`).
    pub section: String,
}

/// Element kind carrying a chain's sections.
pub fn chain_element(chain: FxChain) -> ElementKind {
    match chain {
        FxChain::Input => ElementKind::Ifx,
        FxChain::Track => ElementKind::Tfx,
    }
}

impl Model {
    /// Read a subslot header and name the effect it selects.
    pub fn active_effect(
        &self,
        chain: FxChain,
        subslot: Subslot,
    ) -> Result<ActiveEffect, ModelError> {
        let header = self.subslot_header(chain, subslot)?;
        let index = header
            .get_by_tag(FX_TYPE_TAG)
            .ok_or_else(|| ModelError::UnknownTag {
                section: header.name().to_string(),
                tag: FX_TYPE_TAG.to_string(),
            })?;
        let name = self
            .registry()
            .fx_types()
            .name(chain, index)
            .ok_or_else(|| ModelError::UnknownEffectType {
                chain,
                effect: index.to_string(),
            })?;
        Ok(ActiveEffect {
            chain,
            subslot,
            index,
            section: subslot.effect_section(name),
            name: name.to_string(),
        })
    }

    /// Whether a subslot's switch is on.
    pub fn effect_enabled(&self, chain: FxChain, subslot: Subslot) -> Result<bool, ModelError> {
        let header = self.subslot_header(chain, subslot)?;
        header
            .get_by_tag(SWITCH_TAG)
            .map(|v| v != 0)
            .ok_or_else(|| ModelError::UnknownTag {
                section: header.name().to_string(),
                tag: SWITCH_TAG.to_string(),
            })
    }

    /// Parameter section of the selected effect.
    pub fn effect_section(
        &self,
        chain: FxChain,
        subslot: Subslot,
    ) -> Result<ResolvedSection<'_>, ModelError> {
        let active = self.active_effect(chain, subslot)?;
        self.section_in(chain_element(chain), &active.section)
            .ok_or(ModelError::UnknownSection {
                section: active.section,
            })
    }

    /// Mutable parameter section of the selected effect.
    pub fn effect_section_mut(
        &mut self,
        chain: FxChain,
        subslot: Subslot,
    ) -> Result<ResolvedSectionMut<'_>, ModelError> {
        let active = self.active_effect(chain, subslot)?;
        self.section_in_mut(chain_element(chain), &active.section)
            .ok_or(ModelError::UnknownSection {
                section: active.section,
            })
    }

    /// Select an effect by name, recorded as an undoable change.
    ///
    /// Only the header's effect-type index changes; the parameter section
    /// for the new effect must already exist in the record to be edited.
    pub fn select_effect(
        &mut self,
        chain: FxChain,
        subslot: Subslot,
        effect: &str,
    ) -> Result<FieldChange, ModelError> {
        let index = self
            .registry()
            .fx_types()
            .index(chain, effect)
            .ok_or_else(|| ModelError::UnknownEffectType {
                chain,
                effect: effect.to_string(),
            })?;
        let header = subslot.to_string();
        let mut section = self
            .section_in_mut(chain_element(chain), &header)
            .ok_or(ModelError::UnknownSection { section: header.clone() })?;
        section.set_by_tag(FX_TYPE_TAG, index)
    }

    fn subslot_header(
        &self,
        chain: FxChain,
        subslot: Subslot,
    ) -> Result<ResolvedSection<'_>, ModelError> {
        let header = subslot.to_string();
        self.section_in(chain_element(chain), &header)
            .ok_or(ModelError::UnknownSection { section: header })
    }
}
