//! Localized interface text.

use crate::model::SiteLanguage;

/// Keys for every translated string the layout renders itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    Tagline,
    SubmitButton,
    NoWebGl,
    BannerTitle,
    BannerBody,
    MenuMap,
    MenuTable,
    MenuAbout,
    MenuResources,
    MenuPress,
    MenuSiteInformation,
    FooterNote,
    ListEmpty,
    FiltersTitle,
    ColumnName,
    ColumnCategory,
    ColumnLocation,
    ColumnLanguages,
    ColumnWebsite,
    AboutBody,
    ResourcesBody,
}

/// Look up `text` in `language`.
pub fn translate(text: Text, language: SiteLanguage) -> &'static str {
    use SiteLanguage::{En, Es};
    match (text, language) {
        (Text::Tagline, En) => "Find mutual aid networks and food resources near you.",
        (Text::Tagline, Es) => "Encuentra redes de ayuda mutua y recursos alimentarios cerca de ti.",
        (Text::SubmitButton, En) => "Submit a network or resource",
        (Text::SubmitButton, Es) => "Enviar una red o recurso",
        (Text::NoWebGl, En) => {
            "Your browser does not support the interactive map. Try the table view instead."
        }
        (Text::NoWebGl, Es) => {
            "Tu navegador no es compatible con el mapa interactivo. Prueba la vista de tabla."
        }
        (Text::BannerTitle, En) => "Mutual Aid Hub",
        (Text::BannerTitle, Es) => "Centro de Ayuda Mutua",
        (Text::BannerBody, En) => "Communities taking care of each other.",
        (Text::BannerBody, Es) => "Comunidades cuidándose entre sí.",
        (Text::MenuMap, En) => "Map",
        (Text::MenuMap, Es) => "Mapa",
        (Text::MenuTable, En) => "Table",
        (Text::MenuTable, Es) => "Tabla",
        (Text::MenuAbout, En) => "About",
        (Text::MenuAbout, Es) => "Acerca de",
        (Text::MenuResources, En) => "Resources",
        (Text::MenuResources, Es) => "Recursos",
        (Text::MenuPress, En) => "Press",
        (Text::MenuPress, Es) => "Prensa",
        (Text::MenuSiteInformation, En) => "Site information",
        (Text::MenuSiteInformation, Es) => "Información del sitio",
        (Text::FooterNote, En) => "Information is crowdsourced and may be out of date.",
        (Text::FooterNote, Es) => "La información es colaborativa y puede estar desactualizada.",
        (Text::ListEmpty, En) => "No networks match the current filters.",
        (Text::ListEmpty, Es) => "Ninguna red coincide con los filtros actuales.",
        (Text::FiltersTitle, En) => "Filter by type",
        (Text::FiltersTitle, Es) => "Filtrar por tipo",
        (Text::ColumnName, En) => "Name",
        (Text::ColumnName, Es) => "Nombre",
        (Text::ColumnCategory, En) => "Type",
        (Text::ColumnCategory, Es) => "Tipo",
        (Text::ColumnLocation, En) => "Location",
        (Text::ColumnLocation, Es) => "Ubicación",
        (Text::ColumnLanguages, En) => "Languages",
        (Text::ColumnLanguages, Es) => "Idiomas",
        (Text::ColumnWebsite, En) => "Website",
        (Text::ColumnWebsite, Es) => "Sitio web",
        (Text::AboutBody, En) => {
            "This map collects mutual aid networks and food resources so neighbors can find \
             and offer support. Listings are submitted by organizers and volunteers."
        }
        (Text::AboutBody, Es) => {
            "Este mapa reúne redes de ayuda mutua y recursos alimentarios para que los vecinos \
             puedan encontrar y ofrecer apoyo. Las entradas las envían organizadores y voluntarios."
        }
        (Text::ResourcesBody, En) => {
            "Guides and toolkits for starting a mutual aid network or a community fridge."
        }
        (Text::ResourcesBody, Es) => {
            "Guías y herramientas para iniciar una red de ayuda mutua o un refrigerador comunitario."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations_differ_per_language() {
        for text in [Text::Tagline, Text::SubmitButton, Text::MenuAbout] {
            assert_ne!(
                translate(text, SiteLanguage::En),
                translate(text, SiteLanguage::Es)
            );
        }
    }
}
