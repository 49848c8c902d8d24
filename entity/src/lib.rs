pub mod chirp;
pub mod user;

/*
 A user owns chirps, but a chirp can also stand alone: the create endpoint
 stores NULL when the submitted user_id does not parse as a UUID, so the
 foreign key is nullable. Deleting users (the admin reset) cascades to
 their chirps.
 */
