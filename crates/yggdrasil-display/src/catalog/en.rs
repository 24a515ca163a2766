use yggdrasil_core::ErrorKind;

use super::Catalog;
use crate::DisplayMessage;

pub(crate) static EN: Catalog = &[
    (
        ErrorKind::MethodNotAllowed,
        DisplayMessage::new(
            "Internal Error: Method Not Allowed",
            "Method not allowed. Please report this error.",
        ),
    ),
    (
        ErrorKind::NotFound,
        DisplayMessage::new(
            "Internal Error: Endpoint Not Found",
            "The authentication endpoint was not found. Please report this issue.",
        ),
    ),
    (
        ErrorKind::UserMigrated,
        DisplayMessage::new(
            "Error During Login: Account Migrated",
            "You've attempted to login with a migrated account. Try again using the account email as the username.",
        ),
    ),
    (
        ErrorKind::InvalidCredentials,
        DisplayMessage::new(
            "Error During Login: Invalid Credentials",
            "The email or password you've entered is incorrect. Please try again.",
        ),
    ),
    (
        ErrorKind::RateLimited,
        DisplayMessage::new(
            "Error During Login: Too Many Attempts",
            "There have been too many login attempts with this account recently. Please try again later.",
        ),
    ),
    (
        ErrorKind::InvalidToken,
        DisplayMessage::new(
            "Error During Login: Invalid Token",
            "The provided access token is invalid.",
        ),
    ),
    (
        ErrorKind::AccessTokenHasProfile,
        DisplayMessage::new(
            "Error During Login: Token Has Profile",
            "Access token already has a profile assigned. Selecting profiles is not implemented yet.",
        ),
    ),
    (
        ErrorKind::CredentialsMissing,
        DisplayMessage::new(
            "Error During Login: Credentials Not Found",
            "The username/password was not submitted or the password is less than 3 characters.",
        ),
    ),
    (
        ErrorKind::InvalidSaltVersion,
        DisplayMessage::new(
            "Error During Login: Invalid Salt Version",
            "Invalid salt version.",
        ),
    ),
    (
        ErrorKind::UnsupportedMediaType,
        DisplayMessage::new(
            "Internal Error: Unsupported Media Type",
            "Unsupported media type. Please report this error.",
        ),
    ),
    (
        ErrorKind::Gone,
        DisplayMessage::new(
            "Error During Login: Service Retired",
            "This login service is no longer available. The account must be migrated to a Microsoft account.",
        ),
    ),
    (
        ErrorKind::Unreachable,
        DisplayMessage::new(
            "Error During Login: Unreachable",
            "Unable to reach the authentication servers. Ensure that they are online and you are connected to the internet.",
        ),
    ),
    (
        ErrorKind::NotPaid,
        DisplayMessage::new(
            "Error During Login: Game Not Purchased",
            "The account you are logging in with has not purchased a copy of Minecraft.",
        ),
    ),
    (
        ErrorKind::Unknown,
        DisplayMessage::new(
            "Unknown Error During Login",
            "An unknown error has occurred. Please see the console for details.",
        ),
    ),
];
