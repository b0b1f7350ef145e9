//! Literal content of the footer: links, icons and external resources.

/// Font Awesome stylesheet providing the icon glyphs
pub const ICON_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css";

/// Href substrings identifying an already-linked icon stylesheet. The CDN
/// path spells it `font-awesome`, self-hosted kits use `fontawesome`.
pub const ICON_STYLESHEET_MARKERS: [&str; 2] = ["fontawesome", "font-awesome"];

/// jQuery build loaded by the tag-manager snippet when the page lacks one
pub const UTILITY_LIBRARY_URL: &str = "https://code.jquery.com/jquery-3.6.0.min.js";

pub const CONTAINER_ID: &str = "ifood-rodape-container";
pub const CONTENT_CLASS: &str = "ifood-rodape-conteudo";
pub const COLUMN_CLASS: &str = "ifood-rodape-coluna";
pub const NAVIGATION_ID: &str = "ifood-navegacao-inferior";

/// Reserved below the footer when the fixed bar is shown
pub const NAVIGATION_CLEARANCE: &str = "85px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkItem {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialChannel {
    /// Font Awesome classes, e.g. `fab fa-instagram`
    pub icon: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_CHANNELS: [SocialChannel; 5] = [
    SocialChannel {
        icon: "fab fa-instagram",
        url: "https://www.instagram.com/ifoodparaparceiros/",
    },
    SocialChannel {
        icon: "fab fa-youtube",
        url: "https://www.youtube.com/@ifoodparaparceiros",
    },
    SocialChannel {
        icon: "fab fa-telegram",
        url: "https://t.me/+bCOtiVFDvs4yNDIx",
    },
    SocialChannel {
        icon: "fab fa-twitter",
        url: "https://twitter.com/ifood",
    },
    SocialChannel {
        icon: "fab fa-facebook",
        url: "https://www.facebook.com/iFood/",
    },
];

pub const INFO_LINKS: [LinkItem; 3] = [
    LinkItem {
        label: "Site Institucional iFood",
        url: "https://institucional.ifood.com.br/?utm_source=site_ifood",
    },
    LinkItem {
        label: "Compromissos iFood",
        url: "https://institucional.ifood.com.br/nossos-compromissos/",
    },
    LinkItem {
        label: "Ajuda/FAQ",
        url: "https://intercom.help/decola-ifood/pt-BR",
    },
];

pub const PARTNER_LINKS: [LinkItem; 3] = [
    LinkItem {
        label: "Cadastre seu negócio no iFood",
        url: "https://parceiros.ifood.com.br/",
    },
    LinkItem {
        label: "Portal do Entregador",
        url: "https://entregador.ifood.com.br/",
    },
    LinkItem {
        label: "Blog para Parceiros",
        url: "https://blog-parceiros.ifood.com.br/",
    },
];

pub const NAV_BUTTONS: [NavButton; 5] = [
    NavButton {
        id: "inicio",
        icon: "fas fa-home",
        label: "Início",
        url: "https://decolarestaurantes.com.br/decola-restaurante/catalogo?institution=decola-restaurante",
    },
    NavButton {
        id: "sobre",
        icon: "fas fa-fire",
        label: "Sobre o iFood Decola",
        url: "https://decolarestaurantes.com.br/play/video/23156849/detalhe?institution=decola-restaurante",
    },
    NavButton {
        id: "videos",
        icon: "fas fa-play-circle",
        label: "Vídeos",
        url: "https://decolarestaurantes.com.br/decola-restaurante/catalogo/busca?institution=decola-restaurante&filtro=5&acao=busca",
    },
    NavButton {
        id: "favoritos",
        icon: "fas fa-heart",
        label: "Favoritos",
        url: "https://decolarestaurantes.com.br/play/meuscursos/favoritos?institution=decola-restaurante&school=decola-restaurante",
    },
    NavButton {
        id: "certificados",
        icon: "fas fa-certificate",
        label: "Certificados",
        url: "https://decolarestaurantes.com.br/play/meuscertificados/lista?institution=decola-restaurante&school=decola-restaurante",
    },
];
