use yggdrasil_core::ErrorKind;

use super::Catalog;
use crate::DisplayMessage;

pub(crate) static FR: Catalog = &[
    (
        ErrorKind::MethodNotAllowed,
        DisplayMessage::new(
            "Erreur interne : Méthode non autorisée",
            "Méthode non autorisée. Veuillez signaler cette erreur.",
        ),
    ),
    (
        ErrorKind::NotFound,
        DisplayMessage::new(
            "Erreur interne : Terminaison introuvable",
            "Le point de terminaison d'authentification n'a pas été trouvé. Veuillez signaler ce problème.",
        ),
    ),
    (
        ErrorKind::UserMigrated,
        DisplayMessage::new(
            "Erreur lors de la connexion : Compte migré",
            "Ce compte a été migré. Réessayez en utilisant l'e-mail du compte comme identifiant.",
        ),
    ),
    (
        ErrorKind::InvalidCredentials,
        DisplayMessage::new(
            "Erreur lors de la connexion : Login invalides",
            "L'e-mail ou le mot de passe que vous avez saisi est incorrect. Veuillez réessayer.",
        ),
    ),
    (
        ErrorKind::RateLimited,
        DisplayMessage::new(
            "Erreur pendant la connexion : Trop de tentatives",
            "Il y a eu trop de tentatives de connexion avec ce compte récemment. Veuillez réessayer plus tard.",
        ),
    ),
    (
        ErrorKind::InvalidToken,
        DisplayMessage::new(
            "Erreur pendant la connexion : Token invalide",
            "Le token d'accès fourni n'est pas valide.",
        ),
    ),
    (
        ErrorKind::AccessTokenHasProfile,
        DisplayMessage::new(
            "Erreur lors de la connexion : Profil déjà attribué",
            "Un profil est déjà attribué à ce token d'accès. La sélection de profil n'est pas encore prise en charge.",
        ),
    ),
    (
        ErrorKind::CredentialsMissing,
        DisplayMessage::new(
            "Erreur lors de la connexion : Login manquants",
            "Le nom d'utilisateur/mot de passe n'a pas été soumis ou le mot de passe comporte moins de 3 caractères.",
        ),
    ),
    (
        ErrorKind::InvalidSaltVersion,
        DisplayMessage::new(
            "Erreur lors de la connexion : Version de salt invalide",
            "Version de salt invalide.",
        ),
    ),
    (
        ErrorKind::UnsupportedMediaType,
        DisplayMessage::new(
            "Erreur interne : Type de média non supporté",
            "Type de média non supporté. Veuillez signaler cette erreur.",
        ),
    ),
    (
        ErrorKind::Gone,
        DisplayMessage::new(
            "Erreur lors de la connexion : Service retiré",
            "Ce service de connexion n'est plus disponible. Le compte doit être migré vers un compte Microsoft.",
        ),
    ),
    (
        ErrorKind::Unreachable,
        DisplayMessage::new(
            "Erreur lors de la connexion : Inaccessible",
            "Impossible d'atteindre les serveurs d'authentification. Assurez-vous qu'ils sont en ligne et que vous êtes connecté à Internet.",
        ),
    ),
    (
        ErrorKind::NotPaid,
        DisplayMessage::new(
            "Erreur lors de la connexion : Jeu non acheté",
            "Le compte utilisé pour la connexion n'a pas acheté de copie de Minecraft.",
        ),
    ),
    (
        ErrorKind::Unknown,
        DisplayMessage::new(
            "Erreur inconnue pendant la connexion",
            "Une erreur inconnue s'est produite, merci de contacter un administrateur.",
        ),
    ),
];
